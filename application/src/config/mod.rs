//! Application-level configuration.
//!
//! - [`RetryPolicy`] - attempt budget, backoff, jitter and overall deadline
//! - [`SuggestSettings`] - everything the suggestion engine needs, built once at startup

pub mod retry_policy;
pub mod suggest_settings;

pub use retry_policy::RetryPolicy;
pub use suggest_settings::SuggestSettings;
