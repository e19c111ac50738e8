//! Prompt templates for ticket categorization

use crate::ticket::{category::Category, draft::TicketDraft};

/// Templates for the two-message categorization exchange
pub struct PromptTemplate;

impl PromptTemplate {
    /// System instruction: closed label list, label-only answer, closest pick when unsure
    pub fn categorize_system() -> String {
        let allowed = Category::ALL
            .iter()
            .map(|c| format!("'{}'", c.label()))
            .collect::<Vec<_>>()
            .join(",");

        format!(
            "You are a ticket categorizer. ONLY respond with one category from this exact list: [{}]. \
If uncertain, choose the closest single category. Return only the category text, nothing else.",
            allowed
        )
    }

    /// User message: the draft as a compact JSON object
    pub fn categorize_user(draft: &TicketDraft) -> String {
        draft.to_payload()
    }
}
