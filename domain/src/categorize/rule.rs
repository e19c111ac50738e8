//! Keyword rules used when model output is not an exact label

use crate::ticket::category::Category;

/// A single coercion rule: any keyword present selects `category`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoercionRule {
    pub keywords: &'static [&'static str],
    pub category: Category,
}

impl CoercionRule {
    /// Check the rule against already lower-cased text
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Rules in evaluation order. First match wins.
///
/// The keyword sets overlap in practice ("feature request about a bug"), so
/// the order here is part of the contract.
pub const COERCION_RULES: &[CoercionRule] = &[
    CoercionRule {
        keywords: &["bill"],
        category: Category::Billing,
    },
    CoercionRule {
        keywords: &["login", "auth", "password"],
        category: Category::LoginIssue,
    },
    CoercionRule {
        keywords: &["feature", "request", "suggestion"],
        category: Category::FeatureRequest,
    },
    CoercionRule {
        keywords: &["crash", "bug", "error", "technical"],
        category: Category::TechnicalSupport,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let order: Vec<_> = COERCION_RULES.iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![
                Category::Billing,
                Category::LoginIssue,
                Category::FeatureRequest,
                Category::TechnicalSupport
            ]
        );
    }

    #[test]
    fn test_rule_matches_substring() {
        let login = &COERCION_RULES[1];
        assert!(login.matches("oauth token expired"));
        assert!(!login.matches("invoice overdue"));
    }
}
