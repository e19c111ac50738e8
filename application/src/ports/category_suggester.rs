//! Category suggester port
//!
//! What the front controller and the CLI depend on. The production
//! implementation is [`SuggestCategoryUseCase`]; tests substitute their own.

use crate::use_cases::suggest_category::{SuggestError, SuggestInput};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use triage_domain::Suggestion;

/// Anything that can turn a ticket title and description into a suggestion
#[async_trait]
pub trait CategorySuggester: Send + Sync {
    /// Suggest a category, aborting promptly once `cancellation` fires
    async fn suggest(
        &self,
        input: SuggestInput,
        cancellation: &CancellationToken,
    ) -> Result<Suggestion, SuggestError>;
}
