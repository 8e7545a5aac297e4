use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Partner domain tag identifying which partner category a certificate
/// applies to.
pub const FTM_PARTNER_DOMAIN: &str = "FTM";

/// Partner type string for FTM chip providers.
pub const FTM_PROVIDER_PARTNER_TYPE: &str = "FTM_Provider";

// ── Upload ──────────────────────────────────────────────────────────

/// Request payload for uploading an FTM chip certificate.
///
/// Built from the selected FTM record and the signed-in user's profile
/// when the upload dialog opens; exists only for the dialog's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadCertificateRequest {
    pub ftp_provider_id: String,
    pub ftp_chip_detail_id: String,
    pub organization_name: String,
    pub partner_domain: String,
    pub is_it_for_registration_device: bool,
}

/// Upstream response after a successful certificate upload. Used to
/// refresh the record's certificate flags and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateUploadResponse {
    pub upload_date_time: DateTime<Utc>,
    pub expiry_date_time: DateTime<Utc>,
}

// ── Download ────────────────────────────────────────────────────────

/// Which certificate rendition to download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateVariant {
    /// The certificate exactly as the partner uploaded it.
    Original,
    /// The certificate re-signed by the platform CA.
    PlatformSigned,
}

impl CertificateVariant {
    /// Suffix appended to the downloaded file name.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            CertificateVariant::Original => "original",
            CertificateVariant::PlatformSigned => "platform_signed",
        }
    }
}

/// A certificate file prepared for client-side save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadedCertificate {
    pub file_name: String,
    pub content_type: String,
    /// File bytes, base64-encoded for the data-URL save path.
    pub data_base64: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&CertificateVariant::PlatformSigned).unwrap(),
            "\"platform_signed\""
        );
    }

    #[test]
    fn variant_file_suffixes_differ() {
        assert_ne!(
            CertificateVariant::Original.file_suffix(),
            CertificateVariant::PlatformSigned.file_suffix()
        );
    }

    #[test]
    fn upload_request_roundtrip() {
        let req = UploadCertificateRequest {
            ftp_provider_id: "P2023-07".into(),
            ftp_chip_detail_id: "ftm-1001".into(),
            organization_name: "Acme Biometrics".into(),
            partner_domain: FTM_PARTNER_DOMAIN.into(),
            is_it_for_registration_device: true,
        };
        let json = serde_json::to_string(&req).unwrap();
        let back: UploadCertificateRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, back);
    }
}
