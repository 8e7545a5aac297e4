use dioxus::prelude::*;
use shared_types::{DetailMode, FTM_PROVIDER_PARTNER_TYPE};
use shared_ui::{
    Badge, Button, ButtonVariant, Card, CardContent, CardFooter, DetailField, DetailGrid,
    PageActions, PageHeader, PageSubtitle, PageTitle, PageTitleGroup,
};

use super::certificate_panel::CertificatePanel;
use super::list::tone_variant;
use crate::format_helpers::format_datetime_human;
use crate::i18n::use_localizer;
use crate::routes::Route;
use crate::session::use_ftm_session;

#[component]
pub fn FtmDetailPage() -> Element {
    let i18n = use_localizer();
    let session = use_ftm_session();

    let selected = session.selected.read().clone();
    let Some(ctx) = selected else {
        // Reached without a selection, e.g. via a bookmarked URL.
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./detail.css") }
            Card {
                CardContent {
                    p { class: "ftm-detail-missing", {i18n.t("ftmDetail.missingContext")} }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            navigator().push(Route::FtmList {});
                        },
                        {i18n.t("common.back")}
                    }
                }
            }
        };
    };

    let record = ctx.record;
    let mode = ctx.mode;
    let title = match mode {
        DetailMode::View => i18n.t("ftmDetail.viewTitle"),
        DetailMode::Manage => i18n.t("ftmDetail.manageTitle"),
    };
    let created = format_datetime_human(&record.created_date_time);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./detail.css") }
        div { class: "ftm-detail",
            PageHeader {
                PageTitleGroup {
                    PageTitle { "{title}" }
                    PageSubtitle { "{record.make} / {record.model}" }
                }
                PageActions {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            navigator().push(Route::FtmList {});
                        },
                        {i18n.t("common.back")}
                    }
                }
            }

            Card {
                CardContent {
                    DetailGrid {
                        DetailField {
                            label: i18n.t("ftmDetail.partnerId"),
                            value: record.partner_id.clone(),
                        }
                        DetailField {
                            label: i18n.t("ftmDetail.partnerType"),
                            value: FTM_PROVIDER_PARTNER_TYPE.to_string(),
                        }
                        DetailField {
                            label: i18n.t("ftmDetail.make"),
                            value: record.make.clone(),
                        }
                        DetailField {
                            label: i18n.t("ftmDetail.model"),
                            value: record.model.clone(),
                        }
                        DetailField {
                            label: i18n.t("ftmDetail.createdDate"),
                            value: created,
                        }
                        DetailField {
                            label: i18n.t("ftmDetail.status"),
                            Badge {
                                variant: tone_variant(record.status.tone()),
                                {record.status.label()}
                            }
                        }
                    }
                }
                CardFooter {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| {
                            navigator().push(Route::FtmList {});
                        },
                        {i18n.t("common.back")}
                    }
                }
            }

            CertificatePanel { record: record, mode: mode }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Localizer;
    use crate::session::FtmSession;

    #[test]
    fn empty_session_renders_error_panel_instead_of_record() {
        let mut dom = VirtualDom::new(|| {
            use_context_provider(|| Localizer::new("eng"));
            use_context_provider(FtmSession::new);
            rsx! { FtmDetailPage {} }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(
            html.contains("No FTM chip detail is selected"),
            "html: {html}"
        );
        assert!(!html.contains("pc-detail-grid"), "html: {html}");
    }
}
