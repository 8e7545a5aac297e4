pub mod certificate_panel;
pub mod detail;
pub mod list;
