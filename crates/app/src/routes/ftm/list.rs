use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use shared_types::{AppError, DetailMode, FtmDetailContext, FtmRecord, StatusTone};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, CalendarInput, Card, CardContent, DataTable,
    DataTableCell, DataTableRow, PageActions, PageHeader, PageTitle, PageTitleGroup, SearchInput,
    Skeleton,
};

use crate::format_helpers::format_date_human;
use crate::i18n::use_localizer;
use crate::routes::Route;
use crate::session::use_ftm_session;

/// Map a status tone onto the badge palette. Every status badge in the
/// console goes through this one function.
pub(crate) fn tone_variant(tone: StatusTone) -> BadgeVariant {
    match tone {
        StatusTone::Success => BadgeVariant::Success,
        StatusTone::Warning => BadgeVariant::Warning,
        StatusTone::Danger => BadgeVariant::Danger,
        StatusTone::Neutral => BadgeVariant::Neutral,
    }
}

/// Whether a record's certificate expires strictly before the cutoff.
/// Records without a certificate never match.
fn expires_before(record: &FtmRecord, cutoff: DateTime<Utc>) -> bool {
    record
        .certificate_expiry_date_time
        .map(|expiry| expiry < cutoff)
        .unwrap_or(false)
}

/// Case-insensitive substring match over the searchable columns.
fn matches_query(record: &FtmRecord, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    [&record.partner_id, &record.make, &record.model]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

#[component]
pub fn FtmListPage() -> Element {
    let i18n = use_localizer();
    let mut expiry_filter = use_signal(String::new);
    let mut search = use_signal(String::new);

    let data = use_resource(move || async move { server::api::list_ftm_details().await });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./list.css") }
        div { class: "ftm-list",
            PageHeader {
                PageTitleGroup {
                    PageTitle { {i18n.t("ftmList.title")} }
                }
                PageActions {
                    SearchInput {
                        value: search.read().clone(),
                        placeholder: i18n.t("ftmList.searchPlaceholder"),
                        on_input: move |evt: FormEvent| search.set(evt.value().to_string()),
                    }
                    CalendarInput {
                        region: "ftm-expiry-filter",
                        label: i18n.t("ftmList.expiresBefore"),
                        placeholder: i18n.t("ftmList.pickDate"),
                        selected: expiry_filter.read().clone(),
                        on_change: move |iso: String| expiry_filter.set(iso),
                    }
                    if !expiry_filter.read().is_empty() {
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| expiry_filter.set(String::new()),
                            {i18n.t("ftmList.clearFilter")}
                        }
                    }
                }
            }

            match &*data.read() {
                Some(Ok(records)) => {
                    let cutoff = expiry_filter.read().parse::<DateTime<Utc>>().ok();
                    let query = search.read().clone();
                    let visible: Vec<FtmRecord> = records
                        .iter()
                        .filter(|r| matches_query(r, &query))
                        .filter(|r| cutoff.map_or(true, |c| expires_before(r, c)))
                        .cloned()
                        .collect();
                    rsx! { FtmTable { records: visible } }
                }
                Some(Err(err)) => rsx! {
                    Card {
                        CardContent {
                            p { class: "ftm-list-error",
                                {AppError::friendly_message(&err.to_string())}
                            }
                        }
                    }
                },
                None => rsx! {
                    div { class: "ftm-list-loading",
                        Skeleton {}
                        Skeleton {}
                        Skeleton {}
                    }
                },
            }
        }
    }
}

#[component]
fn FtmTable(records: Vec<FtmRecord>) -> Element {
    let i18n = use_localizer();

    if records.is_empty() {
        return rsx! {
            Card {
                CardContent {
                    p { {i18n.t("ftmList.noData")} }
                }
            }
        };
    }

    rsx! {
        DataTable {
            columns: vec![
                i18n.t("ftmList.partnerId"),
                i18n.t("ftmList.make"),
                i18n.t("ftmList.model"),
                i18n.t("ftmList.createdDate"),
                i18n.t("ftmList.status"),
                i18n.t("ftmList.action"),
            ],
            for record in records {
                FtmRow { record: record }
            }
        }
    }
}

#[component]
fn FtmRow(record: FtmRecord) -> Element {
    let i18n = use_localizer();
    let mut session = use_ftm_session();

    let created = format_date_human(&record.created_date_time);
    let view_record = record.clone();
    let manage_record = record.clone();

    rsx! {
        DataTableRow {
            DataTableCell { "{record.partner_id}" }
            DataTableCell { "{record.make}" }
            DataTableCell { "{record.model}" }
            DataTableCell { "{created}" }
            DataTableCell {
                Badge { variant: tone_variant(record.status.tone()), {record.status.label()} }
            }
            DataTableCell {
                div { class: "ftm-row-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            session.selected.set(Some(FtmDetailContext {
                                record: view_record.clone(),
                                mode: DetailMode::View,
                            }));
                            navigator().push(Route::FtmDetail {});
                        },
                        {i18n.t("ftmList.view")}
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            session.selected.set(Some(FtmDetailContext {
                                record: manage_record.clone(),
                                mode: DetailMode::Manage,
                            }));
                            navigator().push(Route::FtmDetail {});
                        },
                        {i18n.t("ftmList.manage")}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::FtmStatus;

    fn record(expiry: Option<&str>) -> FtmRecord {
        FtmRecord {
            ftm_id: "ftm-1001".to_string(),
            partner_id: "P2023-07".to_string(),
            make: "SecureChip".to_string(),
            model: "SC-500".to_string(),
            status: FtmStatus::Approved,
            created_date_time: "2026-01-20T21:35:00Z".parse().unwrap(),
            certificate_upload_date_time: None,
            certificate_expiry_date_time: expiry.map(|s| s.parse().unwrap()),
            is_certificate_available: expiry.is_some(),
        }
    }

    #[test]
    fn expiry_filter_is_strictly_before_cutoff() {
        let cutoff: DateTime<Utc> = "2027-01-01T00:00:00Z".parse().unwrap();
        assert!(expires_before(&record(Some("2026-06-01T00:00:00Z")), cutoff));
        assert!(!expires_before(&record(Some("2027-01-01T00:00:00Z")), cutoff));
        assert!(!expires_before(&record(Some("2027-06-01T00:00:00Z")), cutoff));
    }

    #[test]
    fn records_without_certificate_never_match_filter() {
        let cutoff: DateTime<Utc> = "2099-01-01T00:00:00Z".parse().unwrap();
        assert!(!expires_before(&record(None), cutoff));
    }

    #[test]
    fn calendar_filter_value_parses_as_utc_instant() {
        let cutoff = "2027-01-01T00:00:00Z".parse::<DateTime<Utc>>().ok();
        assert!(cutoff.is_some());
        assert_eq!("".parse::<DateTime<Utc>>().ok(), None);
    }

    #[test]
    fn search_matches_partner_make_and_model_case_insensitively() {
        let r = record(None);
        assert!(matches_query(&r, ""));
        assert!(matches_query(&r, "  "));
        assert!(matches_query(&r, "p2023"));
        assert!(matches_query(&r, "securechip"));
        assert!(matches_query(&r, "sc-5"));
        assert!(!matches_query(&r, "other-partner"));
    }

    #[test]
    fn every_tone_maps_to_a_distinct_badge_variant() {
        let tones = [
            StatusTone::Success,
            StatusTone::Warning,
            StatusTone::Danger,
            StatusTone::Neutral,
        ];
        for (i, a) in tones.iter().enumerate() {
            for b in &tones[i + 1..] {
                assert_ne!(tone_variant(*a), tone_variant(*b));
            }
        }
    }
}
