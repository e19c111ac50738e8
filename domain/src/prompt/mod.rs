//! Prompt domain
//!
//! Templates for the categorization exchange sent to the completion service.

mod template;

pub use template::PromptTemplate;
