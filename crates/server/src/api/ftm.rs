use dioxus::prelude::*;
use shared_types::{
    CertificateUploadResponse, CertificateVariant, DownloadedCertificate, FtmRecord,
    UploadCertificateRequest,
};

// ── FTM chip details ────────────────────────────────────────────────

/// List the FTM chip details registered by the signed-in partner.
#[server]
pub async fn list_ftm_details() -> Result<Vec<FtmRecord>, ServerFnError> {
    use super::to_server_fn_error;

    crate::upstream::get_json::<Vec<FtmRecord>>("/ftpchipdetail")
        .await
        .map_err(to_server_fn_error)
}

// ── Certificate upload ──────────────────────────────────────────────

/// Upload (or re-upload) a partner certificate for an FTM chip detail.
///
/// The file arrives as raw bytes from the browser; certificates are
/// PEM/CER text, so the bytes are validated as UTF-8 before being sent
/// upstream as `certificateData`.
#[server]
pub async fn upload_ftm_certificate(
    request: UploadCertificateRequest,
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
) -> Result<CertificateUploadResponse, ServerFnError> {
    use super::to_server_fn_error;
    use shared_types::AppError;

    if bytes.is_empty() {
        return Err(to_server_fn_error(AppError::bad_request(
            "Certificate file is empty",
        )));
    }
    let certificate_data = String::from_utf8(bytes).map_err(|_| {
        to_server_fn_error(AppError::bad_request(
            "Certificate file must be a PEM/CER text file",
        ))
    })?;

    tracing::info!(
        provider_id = %request.ftp_provider_id,
        chip_detail_id = %request.ftp_chip_detail_id,
        file_name = %file_name,
        content_type = %content_type,
        "Uploading FTM certificate"
    );

    let body = serde_json::json!({
        "request": request,
        "certificate_data": certificate_data,
    });

    crate::upstream::post_json::<_, CertificateUploadResponse>(
        "/ftpchipdetail/uploadcertificate",
        &body,
    )
    .await
    .map_err(to_server_fn_error)
}

// ── Certificate download ────────────────────────────────────────────

#[cfg(feature = "server")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpstreamCertificate {
    certificate_data: String,
}

/// Download a certificate for an FTM chip detail, either the original
/// upload or the platform-signed rendition.
#[server]
pub async fn download_ftm_certificate(
    ftm_id: String,
    partner_id: String,
    variant: CertificateVariant,
) -> Result<DownloadedCertificate, ServerFnError> {
    use super::to_server_fn_error;
    use base64::Engine;

    let path = match variant {
        CertificateVariant::Original => {
            format!("/ftpchipdetail/{ftm_id}/original-ftm-certificate")
        }
        CertificateVariant::PlatformSigned => {
            format!("/ftpchipdetail/{ftm_id}/ftm-certificate")
        }
    };

    tracing::info!(
        ftm_id = %ftm_id,
        partner_id = %partner_id,
        variant = ?variant,
        "Downloading FTM certificate"
    );

    let cert = crate::upstream::get_json::<UpstreamCertificate>(&path)
        .await
        .map_err(to_server_fn_error)?;

    let data_base64 =
        base64::engine::general_purpose::STANDARD.encode(cert.certificate_data.as_bytes());

    Ok(DownloadedCertificate {
        file_name: format!("{}_{}.cer", partner_id, variant.file_suffix()),
        content_type: "application/x-x509-ca-cert".to_string(),
        data_base64,
    })
}
