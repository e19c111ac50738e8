//! Ticket category taxonomy

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The closed set of categories a ticket can be filed under (Value Object)
///
/// Declaration order matches [`Category::ALL`] and is the order the labels
/// are presented to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Billing,
    TechnicalSupport,
    LoginIssue,
    FeatureRequest,
    GeneralFeedback,
}

impl Category {
    /// Every category, in taxonomy order
    pub const ALL: [Category; 5] = [
        Category::Billing,
        Category::TechnicalSupport,
        Category::LoginIssue,
        Category::FeatureRequest,
        Category::GeneralFeedback,
    ];

    /// Human-readable label, exactly as shown to the model and returned to callers
    pub const fn label(self) -> &'static str {
        match self {
            Category::Billing => "Billing",
            Category::TechnicalSupport => "Technical Support",
            Category::LoginIssue => "Login Issue",
            Category::FeatureRequest => "Feature Request",
            Category::GeneralFeedback => "General Feedback",
        }
    }

    /// Match `text` against the labels, ignoring case and surrounding whitespace
    pub fn from_label(text: &str) -> Option<Category> {
        let needle = text.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.label().to_lowercase() == needle)
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::GeneralFeedback
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_label(s).ok_or_else(|| format!("unknown category: {s}"))
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_order() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Billing",
                "Technical Support",
                "Login Issue",
                "Feature Request",
                "General Feedback"
            ]
        );
    }

    #[test]
    fn test_from_label_ignores_case_and_padding() {
        assert_eq!(Category::from_label("  login issue "), Some(Category::LoginIssue));
        assert_eq!(Category::from_label("TECHNICAL SUPPORT"), Some(Category::TechnicalSupport));
        assert_eq!(Category::from_label("Login"), None);
    }

    #[test]
    fn test_default_is_general_feedback() {
        assert_eq!(Category::default(), Category::GeneralFeedback);
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&Category::FeatureRequest).unwrap();
        assert_eq!(json, "\"Feature Request\"");

        let parsed: Category = serde_json::from_str("\"Billing\"").unwrap();
        assert_eq!(parsed, Category::Billing);

        assert!(serde_json::from_str::<Category>("\"Refunds\"").is_err());
    }
}
