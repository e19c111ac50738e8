//! Domain layer for ticket-triage
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Taxonomy
//!
//! Every ticket lands in exactly one of five [`Category`] labels. The set is
//! closed: nothing the model says can widen it.
//!
//! ## Coercion
//!
//! Model output is free text. [`normalize`] maps it onto the taxonomy, first
//! by exact label match, then through an ordered keyword rule table, and
//! finally by falling back to [`Category::GeneralFeedback`].

pub mod categorize;
pub mod core;
pub mod prompt;
pub mod ticket;

// Re-export commonly used types
pub use categorize::{CoercionRule, Normalized, COERCION_RULES, normalize};
pub use core::{error::DomainError, model::Model, string::truncate};
pub use prompt::PromptTemplate;
pub use ticket::{category::Category, draft::TicketDraft, suggestion::Suggestion};
