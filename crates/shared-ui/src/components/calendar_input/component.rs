use dioxus::prelude::*;
use time::{Date, Month, OffsetDateTime};

use crate::components::calendar::{
    Calendar, CalendarGrid, CalendarHeader, CalendarMonthTitle, CalendarNavigation,
    CalendarNextMonthButton, CalendarPreviousMonthButton,
};
use crate::dismiss::{use_open_regions, use_outside_dismiss};

/// Parse the date part of an ISO-8601 string ("YYYY-MM-DD" prefix).
pub fn parse_iso_date(value: &str) -> Option<Date> {
    if value.len() < 10 {
        return None;
    }
    let year: i32 = value.get(0..4)?.parse().ok()?;
    let month: u8 = value.get(5..7)?.parse().ok()?;
    let day: u8 = value.get(8..10)?.parse().ok()?;
    let month = Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

/// Render a date as an ISO-8601 instant at midnight UTC.
pub fn iso_midnight_utc(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}T00:00:00Z",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Display form shown inside the input field.
fn display_date(value: Option<Date>) -> String {
    match value {
        Some(date) => format!(
            "{:02}/{:02}/{:04}",
            date.day(),
            u8::from(date.month()),
            date.year()
        ),
        None => String::new(),
    }
}

fn today_utc() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Text input with a calendar popover for picking a date.
///
/// `selected` is an ISO-8601 string (or empty). Picking a day closes
/// the popover and emits the chosen day as midnight UTC. When the input
/// is empty or unparseable the calendar pre-selects today.
///
/// The popover is a dismissible region: it closes on outside click or
/// when another region opens.
#[component]
pub fn CalendarInput(
    /// Region id for the popover. Must be unique per screen.
    region: &'static str,
    #[props(default)] label: String,
    #[props(default)] placeholder: String,
    /// Supporting text rendered under the label.
    #[props(default)]
    hint: String,
    selected: String,
    on_change: EventHandler<String>,
) -> Element {
    let mut regions = use_open_regions();
    let open = use_memo(move || regions.is_open(region));

    let parsed = parse_iso_date(&selected);
    let effective = parsed.unwrap_or_else(today_utc);
    let mut view_date = use_signal(|| effective);

    use_outside_dismiss(
        region,
        open.into(),
        EventHandler::new(move |_| regions.close(region)),
    );

    let toggle = move |_| {
        if !regions.is_open(region) {
            // Reopen on the selected month, or the current month when empty.
            view_date.set(effective);
        }
        regions.toggle(region);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pc-calendar-input", id: region,
            if !label.is_empty() {
                label { class: "pc-calendar-input-label", "{label}" }
            }
            if !hint.is_empty() {
                p { class: "pc-calendar-input-hint", "{hint}" }
            }
            button {
                r#type: "button",
                class: "pc-calendar-input-field",
                "data-empty": parsed.is_none(),
                onclick: toggle,
                if parsed.is_some() {
                    span { {display_date(parsed)} }
                } else {
                    span { class: "pc-calendar-input-placeholder", "{placeholder}" }
                }
            }
            if open() {
                div { class: "pc-calendar-input-popover",
                    Calendar {
                        selected_date: Some(effective),
                        on_date_change: move |date: Option<Date>| {
                            match date {
                                Some(date) => on_change.call(iso_midnight_utc(date)),
                                None => on_change.call(String::new()),
                            }
                            regions.close(region);
                        },
                        view_date: view_date(),
                        on_view_change: move |date: Date| view_date.set(date),
                        CalendarHeader {
                            CalendarNavigation {
                                CalendarPreviousMonthButton { "‹" }
                                CalendarMonthTitle {}
                                CalendarNextMonthButton { "›" }
                            }
                        }
                        CalendarGrid {}
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

    #[test]
    fn parses_iso_date_prefix() {
        let date = parse_iso_date("2026-02-01T10:00:00Z").unwrap();
        assert_eq!(date.year(), 2026);
        assert_eq!(u8::from(date.month()), 2);
        assert_eq!(date.day(), 1);
        // Plain dates work too
        assert!(parse_iso_date("2026-12-31").is_some());
    }

    #[test]
    fn rejects_malformed_dates() {
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("2026-13-01"), None);
        assert_eq!(parse_iso_date("2026-02-30"), None);
        assert_eq!(parse_iso_date("not-a-date"), None);
    }

    #[test]
    fn emits_midnight_utc_instants() {
        let date = Date::from_calendar_date(2026, Month::February, 1).unwrap();
        assert_eq!(iso_midnight_utc(date), "2026-02-01T00:00:00Z");
        // Round-trips through the parser
        assert_eq!(parse_iso_date(&iso_midnight_utc(date)), Some(date));
    }

    #[test]
    fn empty_selection_falls_back_to_today() {
        let effective = parse_iso_date("").unwrap_or_else(today_utc);
        assert_eq!(effective, today_utc());
    }

    #[test]
    fn hint_renders_under_the_label() {
        let mut dom = VirtualDom::new(|| {
            crate::dismiss::provide_open_regions();
            rsx! {
                CalendarInput {
                    region: "expiry-filter-hint",
                    label: "Certificate expires before",
                    hint: "Shows records expiring strictly before the chosen day",
                    selected: String::new(),
                    on_change: move |_| {},
                }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("pc-calendar-input-hint"), "html: {html}");
        assert!(html.contains("Shows records expiring strictly before the chosen day"));
        // Closed by default: no popover in the initial render
        assert!(!html.contains("pc-calendar-input-popover"), "html: {html}");
    }

    #[test]
    fn display_is_day_month_year() {
        let date = Date::from_calendar_date(2026, Month::January, 5).unwrap();
        assert_eq!(display_date(Some(date)), "05/01/2026");
        assert_eq!(display_date(None), "");
    }
}
