use dioxus::prelude::*;

/// Page header container — title block on one side, actions on the other.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pc-page-header",
            {children}
        }
    }
}

/// Title block, typically a back affordance plus PageTitle/PageSubtitle.
#[component]
pub fn PageTitleGroup(children: Element) -> Element {
    rsx! {
        div { class: "pc-page-title-group", {children} }
    }
}

/// Page title element rendered as an h1.
#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h1 { class: "pc-page-title", {children} }
    }
}

/// Smaller line under the page title (breadcrumb-style context).
#[component]
pub fn PageSubtitle(children: Element) -> Element {
    rsx! {
        p { class: "pc-page-subtitle", {children} }
    }
}

/// Container for action buttons in the page header.
#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "pc-page-actions", {children} }
    }
}
