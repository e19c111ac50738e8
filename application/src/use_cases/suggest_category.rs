//! Suggest Category use case
//!
//! Validates a ticket, asks the completion service for a category with
//! bounded retry, and normalizes whatever comes back onto the taxonomy.
//!
//! ```text
//! SuggestInput ─▶ TicketDraft ─▶ ChatRequest ─▶ [send ⟲ 429/5xx] ─▶ raw text
//!                                                                    │
//!                                  Suggestion ◀── normalize() ◀──────┘
//! ```

use crate::config::{RetryPolicy, SuggestSettings};
use crate::ports::category_suggester::CategorySuggester;
use crate::ports::completion_transport::{
    ChatCompletion, ChatRequest, CompletionTransport, TransportError, TransportResponse,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use triage_domain::{DomainError, Model, Suggestion, TicketDraft, normalize, truncate};

/// Longest slice of an upstream body carried in error messages
const BODY_PREVIEW_LEN: usize = 512;

/// Errors that can occur while suggesting a category
#[derive(Error, Debug)]
pub enum SuggestError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("Completion service rejected the request ({status}): {}", truncate(.body, BODY_PREVIEW_LEN))]
    Upstream { status: u16, body: String },

    #[error("Completion service unavailable after {attempts} attempts")]
    UpstreamUnavailable { attempts: u32 },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Completion service did not answer before the deadline")]
    DeadlineExceeded,

    #[error("Operation cancelled")]
    Cancelled,
}

impl SuggestError {
    /// Caller-correctable input problem
    pub fn is_validation(&self) -> bool {
        matches!(self, SuggestError::Validation(_))
    }

    /// Anything that went wrong talking to the completion service
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            SuggestError::Upstream { .. }
                | SuggestError::UpstreamUnavailable { .. }
                | SuggestError::Transport(_)
                | SuggestError::DeadlineExceeded
        )
    }

    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SuggestError::Cancelled)
    }
}

/// Input for the SuggestCategory use case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestInput {
    pub title: String,
    pub description: String,
}

impl SuggestInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Use case for suggesting a ticket category
///
/// Holds no per-call state; one instance serves any number of concurrent
/// calls.
#[derive(Clone)]
pub struct SuggestCategoryUseCase {
    transport: Arc<dyn CompletionTransport>,
    settings: SuggestSettings,
}

impl SuggestCategoryUseCase {
    pub fn new(transport: Arc<dyn CompletionTransport>, settings: SuggestSettings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    pub fn model(&self) -> &Model {
        &self.settings.model
    }

    /// Execute the use case
    pub async fn execute(
        &self,
        input: SuggestInput,
        cancellation: &CancellationToken,
    ) -> Result<Suggestion, SuggestError> {
        let draft = TicketDraft::try_new(input.title, input.description)?;
        let request = ChatRequest::categorize(&self.settings.model, &draft);

        debug!(
            "Suggesting category for ticket: {}",
            truncate(draft.title(), 80)
        );

        let call = self.send_with_retry(&request, cancellation);
        let raw = match self.settings.retry.deadline {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| SuggestError::DeadlineExceeded)??,
            None => call.await?,
        };

        let normalized = normalize(raw.as_deref());
        if !normalized.exact_match {
            debug!(
                "Coerced model output {:?} to {}",
                raw.as_deref().map(|r| truncate(r, 80)),
                normalized.category
            );
        }

        info!(
            "Suggested {} (model: {}, coerced: {})",
            normalized.category, self.settings.model, !normalized.exact_match
        );

        Ok(Suggestion::new(
            normalized.category,
            self.settings.model.as_str(),
            !normalized.exact_match,
        ))
    }

    /// Send the request, retrying transient failures.
    ///
    /// Returns the first choice's text, or `None` when a 2xx body carried
    /// nothing usable.
    async fn send_with_retry(
        &self,
        request: &ChatRequest,
        cancellation: &CancellationToken,
    ) -> Result<Option<String>, SuggestError> {
        let policy = &self.settings.retry;
        let attempts = policy.attempts();

        for attempt in 1..=attempts {
            if attempt > 1 {
                let delay = policy.delay_before_retry(attempt - 1);
                debug!("Backing off {:?} before attempt {}/{}", delay, attempt, attempts);
                tokio::select! {
                    biased;
                    _ = cancellation.cancelled() => return Err(SuggestError::Cancelled),
                    _ = tokio::time::sleep(delay) => {}
                }
            }

            debug!("Completion attempt {}/{}", attempt, attempts);
            let response = tokio::select! {
                biased;
                _ = cancellation.cancelled() => return Err(SuggestError::Cancelled),
                result = self.transport.send(request) => result?,
            };

            if response.is_success() {
                return Ok(Self::first_choice_text(&response));
            }

            if RetryPolicy::is_transient(response.status) {
                warn!(
                    "Completion service returned {} (attempt {}/{})",
                    response.status, attempt, attempts
                );
                continue;
            }

            return Err(SuggestError::Upstream {
                status: response.status,
                body: response.body,
            });
        }

        Err(SuggestError::UpstreamUnavailable { attempts })
    }

    fn first_choice_text(response: &TransportResponse) -> Option<String> {
        match serde_json::from_str::<ChatCompletion>(&response.body) {
            Ok(completion) => {
                let text = completion.into_first_text();
                if text.is_none() {
                    warn!("Completion response had no usable choice");
                }
                text
            }
            Err(e) => {
                warn!(
                    "Could not decode completion response ({}): {}",
                    e,
                    truncate(&response.body, BODY_PREVIEW_LEN)
                );
                None
            }
        }
    }
}

#[async_trait]
impl CategorySuggester for SuggestCategoryUseCase {
    async fn suggest(
        &self,
        input: SuggestInput,
        cancellation: &CancellationToken,
    ) -> Result<Suggestion, SuggestError> {
        self.execute(input, cancellation).await
    }
}
