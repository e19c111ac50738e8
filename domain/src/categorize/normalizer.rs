//! Normalizer: raw model text → taxonomy member

use super::rule::COERCION_RULES;
use crate::ticket::category::Category;

/// Result of normalizing raw model output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized {
    pub category: Category,
    /// True only when the text was a label verbatim (modulo case and padding)
    pub exact_match: bool,
}

impl Normalized {
    fn exact(category: Category) -> Self {
        Self {
            category,
            exact_match: true,
        }
    }

    fn coerced(category: Category) -> Self {
        Self {
            category,
            exact_match: false,
        }
    }
}

/// Map raw model output onto the taxonomy. Never fails.
///
/// `None` stands for "the upstream gave us nothing usable" and is treated
/// like blank text.
pub fn normalize(raw: Option<&str>) -> Normalized {
    let Some(raw) = raw.filter(|text| !text.trim().is_empty()) else {
        return Normalized::coerced(Category::GeneralFeedback);
    };

    if let Some(category) = Category::from_label(raw) {
        return Normalized::exact(category);
    }

    let lowered = raw.trim().to_lowercase();
    let category = COERCION_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.category)
        .unwrap_or(Category::GeneralFeedback);

    Normalized::coerced(category)
}
