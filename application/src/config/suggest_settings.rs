//! Suggestion engine settings

use super::retry_policy::RetryPolicy;
use triage_domain::Model;

/// Immutable settings handed to [`SuggestCategoryUseCase`](crate::use_cases::suggest_category::SuggestCategoryUseCase).
///
/// Built from the loaded configuration at startup and never re-read.
#[derive(Debug, Clone, Default)]
pub struct SuggestSettings {
    /// Model named in every completion request and echoed in results
    pub model: Model,
    pub retry: RetryPolicy,
}

impl SuggestSettings {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}
