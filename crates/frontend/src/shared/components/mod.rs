pub mod card_animated;
pub mod page_header;
pub mod record_details;
pub mod stat_card;
pub mod table;
pub mod ui;

pub use card_animated::CardAnimated;
pub use page_header::PageHeader;
pub use record_details::{DetailField, RecordDetails};
pub use stat_card::StatCard;
