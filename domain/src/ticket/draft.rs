//! Ticket draft value object

use crate::core::error::DomainError;
use serde::Serialize;

/// A ticket awaiting a category suggestion (Value Object)
///
/// Both fields are guaranteed non-blank; the only way to build one is
/// [`TicketDraft::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketDraft {
    title: String,
    description: String,
}

impl TicketDraft {
    /// Validate and build a draft
    ///
    /// Fails if either field is empty or whitespace-only.
    pub fn try_new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        let description = description.into();
        if title.trim().is_empty() || description.trim().is_empty() {
            return Err(DomainError::InvalidTicket(
                "Title and Description are required.".to_string(),
            ));
        }
        Ok(Self { title, description })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Compact JSON payload sent as the user message
    ///
    /// Fields stay delimited for the model instead of being run together as prose.
    pub fn to_payload(&self) -> String {
        // Two plain strings always serialize.
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_draft() {
        let draft = TicketDraft::try_new("App crashes on save", "Clicking Save closes the app").unwrap();
        assert_eq!(draft.title(), "App crashes on save");
        assert_eq!(draft.description(), "Clicking Save closes the app");
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert!(TicketDraft::try_new("", "body").is_err());
        assert!(TicketDraft::try_new("title", "   ").is_err());
        assert!(TicketDraft::try_new("\t\n", "body").is_err());
    }

    #[test]
    fn test_payload_is_compact_json() {
        let draft = TicketDraft::try_new("Refund", "Charged \"twice\"").unwrap();
        assert_eq!(
            draft.to_payload(),
            r#"{"title":"Refund","description":"Charged \"twice\""}"#
        );
    }
}
