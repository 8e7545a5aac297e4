use dioxus::prelude::*;
use dioxus_primitives::calendar as prim;

pub use dioxus_primitives::calendar::CalendarContext;
pub use time::Date;

#[component]
pub fn Calendar(mut props: prim::CalendarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "pc-calendar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Calendar { ..props }
    }
}

#[component]
pub fn CalendarHeader(mut props: prim::CalendarHeaderProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "pc-calendar-header", None, false));

    rsx! {
        prim::CalendarHeader { ..props }
    }
}

#[component]
pub fn CalendarNavigation(mut props: prim::CalendarNavigationProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "pc-calendar-navigation",
        None,
        false,
    ));

    rsx! {
        prim::CalendarNavigation { ..props }
    }
}

#[component]
pub fn CalendarPreviousMonthButton(mut props: prim::CalendarPreviousMonthButtonProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "pc-calendar-nav-btn", None, false));

    rsx! {
        prim::CalendarPreviousMonthButton { ..props }
    }
}

#[component]
pub fn CalendarNextMonthButton(mut props: prim::CalendarNextMonthButtonProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "pc-calendar-nav-btn", None, false));

    rsx! {
        prim::CalendarNextMonthButton { ..props }
    }
}

#[component]
pub fn CalendarMonthTitle(mut props: prim::CalendarMonthTitleProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "pc-calendar-month-title",
        None,
        false,
    ));

    rsx! {
        prim::CalendarMonthTitle { ..props }
    }
}

#[component]
pub fn CalendarGrid(mut props: prim::CalendarGridProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "pc-calendar-grid", None, false));

    rsx! {
        prim::CalendarGrid { ..props }
    }
}
