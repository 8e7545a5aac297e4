use dioxus::prelude::*;
use shared_types::{
    DetailMode, FtmRecord, FtmStatus, UploadCertificateRequest, UserProfile, FTM_PARTNER_DOMAIN,
};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, ToastOptions,
};

use crate::components::{DownloadCertificateButton, UploadCertificateDialog};
use crate::format_helpers::format_date_human;
use crate::i18n::use_localizer;
use crate::session::use_ftm_session;

/// Actions the certificate panel can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateAction {
    Upload,
    Reupload,
    Download,
}

/// Which actions appear for a mode and certificate-availability pair.
///
/// Manage mode drives the certificate lifecycle: first upload when no
/// certificate exists, download plus re-upload once one does. View mode
/// only ever offers download.
pub(crate) fn certificate_actions(
    mode: DetailMode,
    certificate_available: bool,
) -> Vec<CertificateAction> {
    match (mode, certificate_available) {
        (DetailMode::Manage, false) => vec![CertificateAction::Upload],
        (DetailMode::Manage, true) => {
            vec![CertificateAction::Download, CertificateAction::Reupload]
        }
        (DetailMode::View, _) => vec![CertificateAction::Download],
    }
}

/// In view mode, download is only enabled once the record has passed
/// review or is awaiting it.
pub(crate) fn download_enabled(status: FtmStatus) -> bool {
    matches!(status, FtmStatus::Approved | FtmStatus::PendingApproval)
}

/// Build the upload payload from the selected record and the signed-in
/// user's profile.
pub(crate) fn build_upload_request(
    record: &FtmRecord,
    profile: &UserProfile,
) -> UploadCertificateRequest {
    UploadCertificateRequest {
        ftp_provider_id: record.partner_id.clone(),
        ftp_chip_detail_id: record.ftm_id.clone(),
        organization_name: profile.org_name.clone(),
        partner_domain: FTM_PARTNER_DOMAIN.to_string(),
        is_it_for_registration_device: true,
    }
}

#[component]
pub fn CertificatePanel(record: FtmRecord, mode: DetailMode) -> Element {
    let i18n = use_localizer();
    let profile: UserProfile = use_context();
    let mut session = use_ftm_session();
    let toast = use_toast();
    let mut show_upload = use_signal(|| false);

    let actions = certificate_actions(mode, record.is_certificate_available);
    let request = build_upload_request(&record, &profile);
    let download_disabled = mode == DetailMode::View && !download_enabled(record.status);
    let upload_label = if record.is_certificate_available {
        i18n.t("certificate.reupload")
    } else {
        i18n.t("certificate.upload")
    };
    let success_msg = i18n.t("uploadDialog.successMessage");

    rsx! {
        Card {
            CardHeader {
                CardTitle { {i18n.t("certificate.title")} }
            }
            CardContent {
                if record.is_certificate_available {
                    div { class: "certificate-dates",
                        if let Some(uploaded) = record.certificate_upload_date_time {
                            p {
                                span { class: "certificate-date-label", {i18n.t("certificate.uploadedOn")} }
                                span { {format_date_human(&uploaded)} }
                            }
                        }
                        if let Some(expires) = record.certificate_expiry_date_time {
                            p {
                                span { class: "certificate-date-label", {i18n.t("certificate.expiresOn")} }
                                span { {format_date_human(&expires)} }
                            }
                        }
                    }
                } else {
                    p { class: "certificate-empty", {i18n.t("certificate.notUploaded")} }
                }

                div { class: "certificate-actions",
                    for action in actions {
                        {match action {
                            CertificateAction::Download => rsx! {
                                DownloadCertificateButton {
                                    ftm_id: record.ftm_id.clone(),
                                    partner_id: record.partner_id.clone(),
                                    disabled: download_disabled,
                                }
                            },
                            CertificateAction::Upload | CertificateAction::Reupload => rsx! {
                                Button {
                                    variant: ButtonVariant::Primary,
                                    onclick: move |_| show_upload.set(true),
                                    "{upload_label}"
                                }
                            },
                        }}
                    }
                }
            }
        }

        UploadCertificateDialog {
            open: show_upload,
            request: request,
            previous_upload_date_time: record.certificate_upload_date_time,
            on_close: move |_| show_upload.set(false),
            on_uploaded: move |response| {
                session.apply_upload(&response);
                toast.success(success_msg.clone(), ToastOptions::new());
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(available: bool) -> FtmRecord {
        FtmRecord {
            ftm_id: "ftm-1001".to_string(),
            partner_id: "P2023-07".to_string(),
            make: "SecureChip".to_string(),
            model: "SC-500".to_string(),
            status: FtmStatus::Approved,
            created_date_time: "2026-01-20T21:35:00Z".parse().unwrap(),
            certificate_upload_date_time: None,
            certificate_expiry_date_time: None,
            is_certificate_available: available,
        }
    }

    #[test]
    fn manage_without_certificate_offers_upload_only() {
        assert_eq!(
            certificate_actions(DetailMode::Manage, false),
            vec![CertificateAction::Upload]
        );
    }

    #[test]
    fn manage_with_certificate_offers_download_and_reupload() {
        assert_eq!(
            certificate_actions(DetailMode::Manage, true),
            vec![CertificateAction::Download, CertificateAction::Reupload]
        );
    }

    #[test]
    fn view_mode_never_offers_upload() {
        for available in [false, true] {
            assert_eq!(
                certificate_actions(DetailMode::View, available),
                vec![CertificateAction::Download]
            );
        }
    }

    #[test]
    fn download_enabled_only_while_approved_or_pending_approval() {
        assert!(download_enabled(FtmStatus::Approved));
        assert!(download_enabled(FtmStatus::PendingApproval));
        assert!(!download_enabled(FtmStatus::Rejected));
        assert!(!download_enabled(FtmStatus::PendingCertUpload));
        assert!(!download_enabled(FtmStatus::Deactivated));
    }

    #[test]
    fn upload_request_carries_record_and_profile_identity() {
        let profile = UserProfile {
            user_name: "amal".to_string(),
            org_name: "Acme Biometrics".to_string(),
            lang_code: "eng".to_string(),
        };
        let request = build_upload_request(&record(false), &profile);
        assert_eq!(request.ftp_provider_id, "P2023-07");
        assert_eq!(request.ftp_chip_detail_id, "ftm-1001");
        assert_eq!(request.organization_name, "Acme Biometrics");
        assert_eq!(request.partner_domain, FTM_PARTNER_DOMAIN);
        assert!(request.is_it_for_registration_device);
    }
}
