mod account;
pub use account::*;

mod ftm;
pub use ftm::*;

#[cfg(feature = "server")]
pub(crate) fn to_server_fn_error(err: shared_types::AppError) -> dioxus::prelude::ServerFnError {
    // Serialize the structured error into the message so the client can
    // recover it with AppError::from_server_error.
    let payload = serde_json::to_string(&err).unwrap_or_else(|_| err.to_string());
    dioxus::prelude::ServerFnError::new(payload)
}
