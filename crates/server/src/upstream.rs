//! Thin reqwest layer over the upstream partner-management REST API.
//!
//! Responses arrive in the usual envelope: a `response` payload plus an
//! `errors` array. Any entry in `errors` fails the call.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared_types::AppError;
use std::sync::OnceLock;

static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

fn client() -> &'static reqwest::Client {
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(crate::config::pms_timeout())
            .build()
            .unwrap_or_default()
    })
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    response: Option<T>,
    #[serde(default)]
    errors: Vec<UpstreamError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpstreamError {
    error_code: String,
    message: String,
}

fn unwrap_envelope<T>(envelope: Envelope<T>) -> Result<T, AppError> {
    if let Some(err) = envelope.errors.first() {
        return Err(AppError::upstream(format!(
            "{}: {}",
            err.error_code, err.message
        )));
    }
    envelope
        .response
        .ok_or_else(|| AppError::upstream("Empty response from partner-management API"))
}

async fn parse_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, AppError> {
    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(AppError::unauthorized("Partner-management session expired"));
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::upstream(format!(
            "Partner-management API error ({status}): {body}"
        )));
    }
    let envelope = response
        .json::<Envelope<T>>()
        .await
        .map_err(|e| AppError::upstream(format!("Malformed upstream response: {e}")))?;
    unwrap_envelope(envelope)
}

/// GET `{base}{path}` and unwrap the response envelope.
#[tracing::instrument(level = "debug")]
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let url = format!("{}{}", crate::config::pms_base_url(), path);
    let response = client()
        .get(&url)
        .send()
        .await
        .map_err(|e| AppError::upstream(format!("Upstream request failed: {e}")))?;
    parse_response(response).await
}

/// POST a JSON body to `{base}{path}` and unwrap the response envelope.
#[tracing::instrument(level = "debug", skip(body))]
pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = format!("{}{}", crate::config::pms_base_url(), path);
    let response = client()
        .post(&url)
        .json(body)
        .send()
        .await
        .map_err(|e| AppError::upstream(format!("Upstream request failed: {e}")))?;
    parse_response(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_with_error_entry_fails() {
        let envelope: Envelope<i32> = serde_json::from_str(
            r#"{"response":null,"errors":[{"errorCode":"PMS_CERT_001","message":"expired"}]}"#,
        )
        .unwrap();
        let err = unwrap_envelope(envelope).unwrap_err();
        assert!(err.message.contains("PMS_CERT_001"));
        assert!(err.message.contains("expired"));
    }

    #[test]
    fn envelope_without_response_fails() {
        let envelope: Envelope<i32> = serde_json::from_str(r#"{"response":null}"#).unwrap();
        assert!(unwrap_envelope(envelope).is_err());
    }

    #[test]
    fn envelope_with_response_unwraps() {
        let envelope: Envelope<i32> =
            serde_json::from_str(r#"{"response":7,"errors":[]}"#).unwrap();
        assert_eq!(unwrap_envelope(envelope).unwrap(), 7);
    }
}
