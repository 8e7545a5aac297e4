use dioxus::prelude::*;

/// Two-column grid of labelled fields for detail views.
///
/// Children are `DetailField`s laid out in a responsive grid that
/// collapses to one column on narrow screens.
#[component]
pub fn DetailGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pc-detail-grid", {children} }
    }
}

/// A single labelled field inside a `DetailGrid`.
///
/// For plain text values, pass the `value` prop. For rich content
/// (badges, controls), use children instead.
#[component]
pub fn DetailField(
    /// The field label (e.g. "Partner ID").
    label: String,
    /// The field value as a string. Ignored when children are provided.
    #[props(default)]
    value: String,
    /// Optional children for rich content.
    children: Element,
) -> Element {
    let has_children = children != Ok(VNode::placeholder());

    rsx! {
        div { class: "pc-detail-field",
            p { class: "pc-detail-field-label", "{label}" }
            div { class: "pc-detail-field-value",
                if has_children {
                    {children}
                } else {
                    span { "{value}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_renders_value_when_no_children() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                DetailGrid {
                    DetailField { label: "Partner ID", value: "P2023-07".to_string() }
                }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Partner ID"));
        assert!(html.contains("P2023-07"));
    }

    #[test]
    fn field_prefers_children_over_value() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                DetailField { label: "Status", value: "ignored".to_string(),
                    span { "Approved" }
                }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Approved"));
        assert!(!html.contains("ignored"));
    }
}
