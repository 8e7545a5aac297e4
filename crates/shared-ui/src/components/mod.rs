// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod detail_list;
pub mod input;
pub mod page_header;
pub mod skeleton;

// Primitive wrappers
pub mod calendar;
pub mod calendar_input;
pub mod dialog;
pub mod separator;
pub mod toast;

// Re-exports for convenience
pub use badge::*;
pub use button::*;
pub use calendar::*;
pub use calendar_input::*;
pub use card::*;
pub use data_table::*;
pub use detail_list::*;
pub use dialog::*;
pub use input::*;
pub use page_header::*;
pub use separator::*;
pub use skeleton::*;
pub use toast::*;
