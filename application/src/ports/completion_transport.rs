//! Completion transport port
//!
//! Defines how the suggestion engine reaches the chat-completions service,
//! plus the wire shapes of the request it sends and the response it reads.
//!
//! The transport deliberately does not interpret HTTP status codes: it hands
//! back status and body, and the engine owns the retry decision.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use triage_domain::{Model, PromptTemplate, TicketDraft};

/// Errors raised before any HTTP status is available
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("No API credential configured for the completion service")]
    MissingCredential,

    #[error("Request to the completion service timed out")]
    Timeout,

    #[error("Request to the completion service failed: {0}")]
    Request(String),
}

/// Raw HTTP outcome of one completion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Transport for chat-completion requests
///
/// One call is one HTTP round trip. Implementations live in the
/// infrastructure layer.
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> Result<TransportResponse, TransportError>;
}

// ==================== Wire Types ====================

/// One message of the chat exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat-completion request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: Model,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

impl ChatRequest {
    /// Categorization request: fixed system instruction, draft payload, temperature 0
    pub fn categorize(model: &Model, draft: &TicketDraft) -> Self {
        Self {
            model: model.clone(),
            messages: vec![
                ChatMessage::system(PromptTemplate::categorize_system()),
                ChatMessage::user(PromptTemplate::categorize_user(draft)),
            ],
            temperature: 0.0,
        }
    }
}

/// Chat-completion response body (only the fields we read)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletion {
    /// Text of the first choice, if there is any
    pub fn into_first_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}
