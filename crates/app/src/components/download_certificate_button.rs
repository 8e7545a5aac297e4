use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaChevronDown;
use dioxus_free_icons::Icon;
use shared_types::{AppError, CertificateVariant, DownloadedCertificate};
use shared_ui::{
    use_open_regions, use_outside_dismiss, use_toast, Button, ButtonVariant, ToastOptions,
};

use crate::i18n::use_localizer;

const REGION: &str = "download-certificate-menu";

/// Script that saves a downloaded certificate through a temporary
/// data-URL anchor.
fn save_file_script(cert: &DownloadedCertificate) -> String {
    format!(
        r#"
        (function() {{
            var a = document.createElement("a");
            a.href = "data:{};base64,{}";
            a.download = "{}";
            document.body.appendChild(a);
            a.click();
            a.remove();
        }})();
        "#,
        cert.content_type, cert.data_base64, cert.file_name
    )
}

/// Split button offering both certificate renditions for download.
///
/// The menu is a dismissible region: it closes on outside click or when
/// another region (e.g. a calendar popover) opens.
#[component]
pub fn DownloadCertificateButton(
    ftm_id: String,
    partner_id: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    let i18n = use_localizer();
    let toast = use_toast();
    let mut regions = use_open_regions();
    let open = use_memo(move || regions.is_open(REGION));

    use_outside_dismiss(
        REGION,
        open.into(),
        EventHandler::new(move |_| regions.close(REGION)),
    );

    let fallback = i18n.t("certificate.downloadFailed");
    let download = move |variant: CertificateVariant| {
        let ftm_id = ftm_id.clone();
        let partner_id = partner_id.clone();
        let fallback = fallback.clone();
        regions.close(REGION);
        spawn(async move {
            match server::api::download_ftm_certificate(ftm_id, partner_id, variant).await {
                Ok(cert) => {
                    document::eval(&save_file_script(&cert));
                }
                Err(err) => {
                    let parsed = AppError::from_server_error(&err.to_string());
                    let message = parsed.map(|e| e.message).unwrap_or(fallback);
                    toast.error(message, ToastOptions::new());
                }
            }
        });
    };

    let mut download_original = download.clone();
    let mut download_signed = download;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./download_certificate_button.css") }
        div { class: "download-cert", id: REGION,
            Button {
                variant: ButtonVariant::Outline,
                class: "download-cert-trigger",
                disabled: disabled,
                onclick: move |_| regions.toggle(REGION),
                {i18n.t("certificate.download")}
                Icon::<FaChevronDown> { icon: FaChevronDown, width: 12, height: 12 }
            }
            if open() {
                div { class: "download-cert-menu",
                    button {
                        r#type: "button",
                        class: "download-cert-item",
                        onclick: move |_| download_original(CertificateVariant::Original),
                        {i18n.t("certificate.original")}
                    }
                    button {
                        r#type: "button",
                        class: "download-cert-item",
                        onclick: move |_| download_signed(CertificateVariant::PlatformSigned),
                        {i18n.t("certificate.platformSigned")}
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
    fn save_script_builds_data_url_anchor() {
        let cert = DownloadedCertificate {
            file_name: "P2023-07_original.cer".to_string(),
            content_type: "application/x-x509-ca-cert".to_string(),
            data_base64: "QUJD".to_string(),
        };
        let script = save_file_script(&cert);
        assert!(script.contains("data:application/x-x509-ca-cert;base64,QUJD"));
        assert!(script.contains("a.download = \"P2023-07_original.cer\""));
        assert!(script.contains("a.remove()"));
    }
}
