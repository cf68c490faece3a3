pub mod notification_banner;
pub mod pagination_controls;
pub mod search_input;
pub mod table;

pub use notification_banner::NotificationBanner;
pub use pagination_controls::PaginationControls;
pub use search_input::SearchInput;
