use dioxus::prelude::*;

/// Search field for filtering tables.
#[component]
pub fn SearchInput(
    #[props(default)] value: String,
    on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "search",
            class: "pc-search-input",
            value: value,
            placeholder: placeholder,
            oninput: move |evt| on_input.call(evt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_search_field_with_placeholder() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                SearchInput {
                    value: "sc-500",
                    placeholder: "Search by partner ID, make, or model...",
                    on_input: move |_| {},
                }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("type=\"search\""), "html: {html}");
        assert!(
            html.contains("placeholder=\"Search by partner ID, make, or model...\""),
            "html: {html}"
        );
        assert!(html.contains("value=\"sc-500\""), "html: {html}");
    }
}
