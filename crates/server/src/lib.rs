pub mod api;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod upstream;
