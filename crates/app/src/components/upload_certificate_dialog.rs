use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCircleCheck;
use dioxus_free_icons::Icon;
use shared_types::{
    AppError, CertificateUploadResponse, UploadCertificateRequest, FTM_PROVIDER_PARTNER_TYPE,
};
use shared_ui::{
    Button, ButtonVariant, DialogContent, DialogDescription, DialogRoot, DialogTitle, Separator,
};

use crate::i18n::use_localizer;
use crate::routes::Route;

/// Certificates are small PEM text files; anything bigger is a mistake.
const MAX_CERT_BYTES: usize = 2 * 1024 * 1024;

const SCROLL_LOCK_JS: &str = "document.body.style.overflow = 'hidden';";
const SCROLL_UNLOCK_JS: &str = "document.body.style.overflow = '';";

/// Content type sent when the browser does not report one for the
/// picked file.
const CERT_CONTENT_TYPE: &str = "application/x-x509-ca-cert";

/// Whether a file name has an accepted certificate extension.
fn accepted_certificate_file(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.ends_with(".cer") || lower.ends_with(".pem")
}

/// Modal dialog for uploading an FTM chip certificate.
///
/// Validation and upstream errors render inline and keep the dialog
/// open. Cancel returns to the detail screen unchanged; after a
/// successful upload, Close navigates back to the list.
#[component]
pub fn UploadCertificateDialog(
    open: ReadSignal<bool>,
    request: UploadCertificateRequest,
    #[props(default)] previous_upload_date_time: Option<DateTime<Utc>>,
    on_close: EventHandler<()>,
    on_uploaded: EventHandler<CertificateUploadResponse>,
) -> Element {
    let i18n = use_localizer();

    let mut file_name = use_signal(|| None::<String>);
    let mut file_content_type = use_signal(|| None::<String>);
    let mut file_bytes = use_signal(|| None::<Vec<u8>>);
    let mut error_msg = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    let mut success = use_signal(|| None::<CertificateUploadResponse>);

    // Lock body scroll while the dialog is open; reset state on reopen.
    use_effect(move || {
        if open() {
            file_name.set(None);
            file_content_type.set(None);
            file_bytes.set(None);
            error_msg.set(None);
            submitting.set(false);
            success.set(None);
            document::eval(SCROLL_LOCK_JS);
        } else {
            document::eval(SCROLL_UNLOCK_JS);
        }
    });
    use_drop(move || {
        document::eval(SCROLL_UNLOCK_JS);
    });

    let file_i18n = i18n.clone();
    let handle_file = move |evt: FormEvent| {
        let i18n = file_i18n.clone();
        async move {
            let files = evt.files();
            let Some(f) = files.first() else { return };
            let name = f.name();
            let content_type = f
                .content_type()
                .unwrap_or_else(|| CERT_CONTENT_TYPE.to_string());
            if !accepted_certificate_file(&name) {
                error_msg.set(Some(i18n.t("uploadDialog.invalidType")));
                return;
            }
            match f.read_bytes().await {
                Ok(bytes) if bytes.is_empty() => {
                    error_msg.set(Some(i18n.t("uploadDialog.emptyFile")));
                }
                Ok(bytes) if bytes.len() > MAX_CERT_BYTES => {
                    error_msg.set(Some(i18n.t("uploadDialog.tooLarge")));
                }
                Ok(bytes) => {
                    error_msg.set(None);
                    file_bytes.set(Some(bytes.to_vec()));
                    file_content_type.set(Some(content_type));
                    file_name.set(Some(name));
                }
                Err(_) => {
                    error_msg.set(Some("Failed to read file.".to_string()));
                }
            }
        }
    };

    let no_file_msg = i18n.t("uploadDialog.noFile");
    let submit_request = request.clone();
    let handle_submit = move |_| {
        let Some(bytes) = file_bytes.peek().clone() else {
            error_msg.set(Some(no_file_msg.clone()));
            return;
        };
        let name = file_name.peek().clone().unwrap_or_default();
        let content_type = file_content_type
            .peek()
            .clone()
            .unwrap_or_else(|| CERT_CONTENT_TYPE.to_string());
        let request = submit_request.clone();
        submitting.set(true);
        error_msg.set(None);
        spawn(async move {
            match server::api::upload_ftm_certificate(request, name, content_type, bytes).await {
                Ok(response) => {
                    success.set(Some(response.clone()));
                    on_uploaded.call(response);
                }
                Err(err) => {
                    error_msg.set(Some(AppError::friendly_message(&err.to_string())));
                }
            }
            submitting.set(false);
        });
    };

    let handle_cancel = move |_| on_close.call(());
    let handle_close = move |_| {
        on_close.call(());
        navigator().push(Route::FtmList {});
    };

    let chosen = file_name.read().clone();
    let can_submit = file_bytes.read().is_some() && !submitting();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./upload_certificate_dialog.css") }
        DialogRoot {
            open: open(),
            on_open_change: move |is_open: bool| {
                if !is_open {
                    on_close.call(());
                }
            },
            DialogContent {
                if success.read().is_some() {
                    div { class: "upload-dialog-success",
                        Icon::<FaCircleCheck> { icon: FaCircleCheck, width: 40, height: 40, fill: "#188038" }
                        DialogTitle { {i18n.t("uploadDialog.successTitle")} }
                        p { {i18n.t("uploadDialog.successMessage")} }
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: handle_close,
                            {i18n.t("uploadDialog.close")}
                        }
                    }
                } else {
                    DialogTitle { {i18n.t("uploadDialog.title")} }
                    DialogDescription { {i18n.t("uploadDialog.description")} }

                    div { class: "upload-dialog-meta",
                        p {
                            span { class: "upload-dialog-meta-label", {i18n.t("uploadDialog.partnerType")} }
                            span { "{FTM_PROVIDER_PARTNER_TYPE}" }
                        }
                        if let Some(uploaded) = previous_upload_date_time {
                            p {
                                span { class: "upload-dialog-meta-label", {i18n.t("uploadDialog.lastUploaded")} }
                                span { {crate::format_helpers::format_datetime_human(&uploaded)} }
                            }
                        }
                    }

                    div { class: "upload-dialog-file",
                        label { class: "upload-dialog-file-button",
                            input {
                                r#type: "file",
                                accept: ".cer,.pem",
                                onchange: handle_file,
                            }
                            {i18n.t("uploadDialog.chooseFile")}
                        }
                        span { class: "upload-dialog-file-name",
                            if let Some(name) = chosen {
                                "{name}"
                            } else {
                                {i18n.t("uploadDialog.noFileChosen")}
                            }
                        }
                    }

                    if let Some(message) = error_msg.read().as_ref() {
                        p { class: "upload-dialog-error", "{message}" }
                    }

                    Separator {}

                    div { class: "upload-dialog-actions",
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: handle_cancel,
                            {i18n.t("uploadDialog.cancel")}
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: !can_submit,
                            onclick: handle_submit,
                            if submitting() {
                                {i18n.t("uploadDialog.uploading")}
                            } else {
                                {i18n.t("uploadDialog.submit")}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_cer_and_pem_only() {
        assert!(accepted_certificate_file("partner.cer"));
        assert!(accepted_certificate_file("partner.pem"));
        assert!(accepted_certificate_file("PARTNER.CER"));
        assert!(!accepted_certificate_file("partner.pdf"));
        assert!(!accepted_certificate_file("partner.cer.exe"));
        assert!(!accepted_certificate_file("partner"));
    }

    #[test]
    fn scroll_scripts_toggle_body_overflow() {
        assert!(SCROLL_LOCK_JS.contains("overflow = 'hidden'"));
        assert!(SCROLL_UNLOCK_JS.contains("overflow = ''"));
    }
}
