//! Message catalogs for the console UI.
//!
//! Catalogs are flat key/value JSON files embedded at compile time and
//! selected by the signed-in user's preferred language. Unknown keys
//! fall back to the key itself so a missing translation is visible but
//! never a panic.

use std::collections::HashMap;
use std::sync::OnceLock;

const EN: &str = include_str!("i18n/en.json");
const ARA: &str = include_str!("i18n/ara.json");

/// Text direction for the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_attr(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

fn catalog(lang_code: &str) -> &'static HashMap<String, String> {
    static EN_MAP: OnceLock<HashMap<String, String>> = OnceLock::new();
    static ARA_MAP: OnceLock<HashMap<String, String>> = OnceLock::new();

    match lang_code {
        "ara" => ARA_MAP.get_or_init(|| parse_catalog(ARA)),
        _ => EN_MAP.get_or_init(|| parse_catalog(EN)),
    }
}

fn parse_catalog(raw: &str) -> HashMap<String, String> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Looks up UI strings for one language. Cheap to clone; provided as a
/// context at the application root.
#[derive(Debug, Clone, PartialEq)]
pub struct Localizer {
    lang_code: String,
}

impl Localizer {
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang_code: lang_code.to_string(),
        }
    }

    /// Translate `key`, falling back to the key itself when missing.
    pub fn t(&self, key: &str) -> String {
        catalog(&self.lang_code)
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    pub fn direction(&self) -> Direction {
        match self.lang_code.as_str() {
            "ara" => Direction::Rtl,
            _ => Direction::Ltr,
        }
    }
}

/// Access the [`Localizer`] context.
pub fn use_localizer() -> Localizer {
    dioxus::prelude::use_context::<Localizer>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn english_catalog_resolves_known_keys() {
        let l = Localizer::new("eng");
        assert_eq!(l.t("ftmList.title"), "FTM Chip Details");
        assert_eq!(l.direction(), Direction::Ltr);
    }

    #[test]
    fn unknown_keys_fall_back_to_the_key() {
        let l = Localizer::new("eng");
        assert_eq!(l.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn arabic_is_right_to_left() {
        let l = Localizer::new("ara");
        assert_eq!(l.direction(), Direction::Rtl);
        assert_eq!(l.direction().as_attr(), "rtl");
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let l = Localizer::new("xyz");
        assert_eq!(l.t("ftmList.title"), "FTM Chip Details");
        assert_eq!(l.direction(), Direction::Ltr);
    }

    #[test]
    fn catalogs_cover_the_same_keys() {
        let en = parse_catalog(EN);
        let ara = parse_catalog(ARA);
        let mut en_keys: Vec<_> = en.keys().collect();
        let mut ara_keys: Vec<_> = ara.keys().collect();
        en_keys.sort();
        ara_keys.sort();
        assert_eq!(en_keys, ara_keys);
    }
}
