use dioxus::prelude::*;
use dioxus_primitives::dialog as prim;

/// Modal dialog root. The console only ever closes dialogs through
/// `on_open_change` (overlay click, Escape); opening is driven by the
/// caller's own state, so the narrow controlled surface is enough.
#[component]
pub fn DialogRoot(
    open: bool,
    on_open_change: EventHandler<bool>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot {
            class: "pc-dialog-overlay",
            open: Some(open),
            on_open_change: move |is_open: bool| on_open_change.call(is_open),
            {children}
        }
    }
}

#[component]
pub fn DialogContent(children: Element) -> Element {
    rsx! {
        prim::DialogContent {
            class: Some("pc-dialog-content".to_string()),
            {children}
        }
    }
}

#[component]
pub fn DialogTitle(children: Element) -> Element {
    rsx! {
        prim::DialogTitle { class: "pc-dialog-title", {children} }
    }
}

#[component]
pub fn DialogDescription(children: Element) -> Element {
    rsx! {
        prim::DialogDescription { class: "pc-dialog-description", {children} }
    }
}
