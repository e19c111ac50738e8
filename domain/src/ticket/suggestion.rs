//! Suggestion result value object

use super::category::Category;
use serde::{Deserialize, Serialize};

/// The outcome of one categorization (Value Object)
///
/// `category` is always a taxonomy member. `coerced` records whether the
/// model's raw text had to be mapped onto it rather than matching a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: Category,
    /// Identifier of the model that produced the raw text
    pub model: String,
    pub coerced: bool,
}

impl Suggestion {
    pub fn new(category: Category, model: impl Into<String>, coerced: bool) -> Self {
        Self {
            category,
            model: model.into(),
            coerced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let suggestion = Suggestion::new(Category::LoginIssue, "gpt-4o-mini", true);
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "category": "Login Issue",
                "model": "gpt-4o-mini",
                "coerced": true
            })
        );
    }
}
