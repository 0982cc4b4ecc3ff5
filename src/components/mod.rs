//! UI Components
//!
//! Reusable Leptos components.

mod nav_link;
mod nav_header;
mod footer;
mod flash;
mod form_input;
mod value_autocomplete;
mod structured_filter;
mod paginated_grid;
mod entity_grid;
mod dashboard;
mod content_page;
mod profile_form;
mod password_form;
mod system_info;
mod file_info;

pub use nav_link::NavLink;
pub use nav_header::NavHeader;
pub use footer::Footer;
pub use flash::{Flash, FlashMessage};
pub use form_input::FormInput;
pub use value_autocomplete::ValueAutocomplete;
pub use structured_filter::StructuredFilter;
pub use paginated_grid::PaginatedGrid;
pub use entity_grid::EntityGrid;
pub use dashboard::Dashboard;
pub use content_page::ContentPanel;
pub use profile_form::ProfilePage;
pub use password_form::{PasswordChange, PasswordReset};
pub use system_info::SystemInfoPage;
pub use file_info::FileInfoPage;
