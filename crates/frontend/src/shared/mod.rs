pub mod api_utils;
pub mod components;
pub mod data_grid;
pub mod icons;
pub mod list_utils;
