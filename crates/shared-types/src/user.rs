use serde::{Deserialize, Serialize};

/// Profile of the signed-in partner user, read from the console's
/// session endpoint. Supplies organization metadata for certificate
/// uploads and the language code driving layout direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_name: String,
    pub org_name: String,
    /// Three-letter language code (e.g. "eng", "ara").
    pub lang_code: String,
}

impl UserProfile {
    /// Fallback profile when the session endpoint is unavailable.
    pub fn anonymous() -> Self {
        Self {
            user_name: "guest".to_string(),
            org_name: String::new(),
            lang_code: "eng".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_profile_defaults_to_english() {
        let profile = UserProfile::anonymous();
        assert_eq!(profile.lang_code, "eng");
        assert!(profile.org_name.is_empty());
    }
}
