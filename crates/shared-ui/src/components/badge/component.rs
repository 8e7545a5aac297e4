use dioxus::prelude::*;

/// Visual tone for badges, matching the console's status palette.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    Success,
    Warning,
    Danger,
    #[default]
    Neutral,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Danger => "danger",
            BadgeVariant::Neutral => "neutral",
        }
    }
}

/// Inline label pill used for lifecycle statuses.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "pc-badge", None, false),
        Attribute::new("data-tone", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn badge_renders_tone_attribute() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                Badge { variant: BadgeVariant::Warning, "Pending Approval" }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("data-tone=\"warning\""), "html: {html}");
        assert!(html.contains("Pending Approval"));
    }

    #[test]
    fn badge_defaults_to_neutral() {
        let mut dom = VirtualDom::new(|| rsx! { Badge { "Deactivated" } });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("data-tone=\"neutral\""), "html: {html}");
    }

    #[test]
    fn variant_classes_are_distinct() {
        let all = [
            BadgeVariant::Success,
            BadgeVariant::Warning,
            BadgeVariant::Danger,
            BadgeVariant::Neutral,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.class(), b.class());
            }
        }
    }
}
