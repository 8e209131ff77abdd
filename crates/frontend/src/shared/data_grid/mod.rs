//! Таблица данных с поиском и сортировкой для списков справочников.

pub mod component;
pub mod engine;
pub mod grid;
pub mod render;

pub use component::DataTable;
pub use engine::{
    CellContent, ColumnDescriptor, FieldValue, GridRow, SearchSpec, SortDirection, ViewState,
};
pub use grid::{DataGrid, DEFAULT_EMPTY_MESSAGE};
pub use render::SortIndicator;
