//! Environment-driven configuration for the upstream partner-management
//! API connection.

use std::time::Duration;

/// Load `.env` if present. Call once at startup.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}

/// Base URL of the upstream partner-management API.
pub fn pms_base_url() -> String {
    std::env::var("PMS_API_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:9107/v1/partnermanager".to_string())
}

/// Request timeout for upstream calls (seconds), default 30.
pub fn pms_timeout() -> Duration {
    let secs = std::env::var("PMS_API_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30);
    Duration::from_secs(secs)
}

/// Max certificate upload size in bytes (default 2 MB) — certificates
/// are small; anything bigger is a client mistake.
pub fn max_upload_bytes() -> usize {
    std::env::var("MAX_UPLOAD_BYTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(2 * 1024 * 1024)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane_without_env() {
        // These read the process environment; the defaults kick in when
        // the variables are unset, which is the normal test environment.
        assert!(pms_timeout().as_secs() >= 1);
        assert!(max_upload_bytes() >= 1024);
    }
}
