//! OpenAI-compatible completion service adapter
//!
//! Implements [`CompletionTransport`](triage_application::CompletionTransport)
//! over HTTPS with reqwest.

pub mod transport;

pub use transport::OpenAiTransport;
