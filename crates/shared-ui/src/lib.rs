pub mod components;
pub mod dismiss;

pub use components::*;
pub use dismiss::*;
