// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod page_header;
pub mod qr_code;
pub mod sheet;

// Primitive wrappers
pub mod avatar;
pub mod dropdown_menu;
pub mod switch;

// Layout
pub mod sidebar;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use dropdown_menu::*;
pub use form_select::*;
pub use page_header::*;
pub use qr_code::*;
pub use sheet::*;
pub use sidebar::*;
pub use switch::*;
