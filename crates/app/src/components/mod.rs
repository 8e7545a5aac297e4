pub mod download_certificate_button;
pub mod upload_certificate_dialog;

pub use download_certificate_button::DownloadCertificateButton;
pub use upload_certificate_dialog::UploadCertificateDialog;
