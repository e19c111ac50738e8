//! Application layer for ticket-triage
//!
//! This crate contains the suggestion use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{RetryPolicy, SuggestSettings};
pub use ports::{
    category_suggester::CategorySuggester,
    completion_transport::{
        ChatCompletion, ChatMessage, ChatRequest, CompletionTransport, TransportError,
        TransportResponse,
    },
};
pub use use_cases::suggest_category::{SuggestCategoryUseCase, SuggestError, SuggestInput};
