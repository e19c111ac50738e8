//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod openai;
mod retry;
mod server;

pub use openai::FileOpenAiConfig;
pub use retry::FileRetryConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use triage_application::SuggestSettings;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("retry.max_attempts cannot be 0")]
    ZeroAttempts,

    #[error("retry.deadline_ms cannot be 0; omit it to disable the deadline")]
    ZeroDeadline,

    #[error("openai.model cannot be empty")]
    EmptyModelName,

    #[error("openai.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("openai.request_timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("server.bind is not a socket address: {0}")]
    InvalidBindAddress(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion service settings
    pub openai: FileOpenAiConfig,
    /// Upstream retry settings
    pub retry: FileRetryConfig,
    /// HTTP front controller settings
    pub server: FileServerConfig,
}

impl FileConfig {
    /// Validate what a suggestion call needs (`[openai]` and `[retry]`),
    /// returning every detected issue.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.openai.model.is_blank() {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        if self.openai.base_url.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyBaseUrl);
        }
        if self.openai.request_timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        if self.retry.max_attempts == 0 {
            issues.push(ConfigValidationError::ZeroAttempts);
        }
        if self.retry.deadline_ms == Some(0) {
            issues.push(ConfigValidationError::ZeroDeadline);
        }

        issues
    }

    /// [`validate`](Self::validate) plus the `[server]` section, for `serve`
    pub fn validate_for_serve(&self) -> Vec<ConfigValidationError> {
        let mut issues = self.validate();
        if self.server.socket_addr().is_none() {
            issues.push(ConfigValidationError::InvalidBindAddress(
                self.server.bind.clone(),
            ));
        }
        issues
    }

    /// Immutable engine settings derived from this configuration
    pub fn suggest_settings(&self) -> SuggestSettings {
        SuggestSettings::new(self.openai.model.clone()).with_retry(self.retry.to_policy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use triage_domain::Model;

    #[test]
    fn test_defaults_are_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[openai]
api_key_env = "TRIAGE_TEST_KEY"
base_url = "https://llm.internal.example"
model = "gpt-4.1-mini"
request_timeout_seconds = 15

[retry]
max_attempts = 5
base_delay_ms = 100
jitter_ms = 20
deadline_ms = 8000

[server]
bind = "0.0.0.0:8080"
allowed_origins = ["https://support.example.com"]
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.openai.api_key_env, "TRIAGE_TEST_KEY");
        assert_eq!(config.openai.model, Model::Gpt41Mini);
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.retry.deadline_ms, Some(8000));
        assert_eq!(config.server.allowed_origins, vec!["https://support.example.com"]);
        assert!(config.validate().is_empty());

        let settings = config.suggest_settings();
        assert_eq!(settings.model, Model::Gpt41Mini);
        assert_eq!(settings.retry.max_attempts, 5);
        assert_eq!(settings.retry.base_delay, Duration::from_millis(100));
        assert_eq!(settings.retry.jitter, Duration::from_millis(20));
        assert_eq!(settings.retry.deadline, Some(Duration::from_secs(8)));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: FileConfig = toml::from_str("[retry]\nmax_attempts = 4\n").unwrap();
        assert_eq!(config.retry.max_attempts, 4);
        assert_eq!(config.retry.base_delay_ms, 250);
        assert_eq!(config.openai.model, Model::Gpt4oMini);
        assert_eq!(config.server.allowed_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn test_zero_deadline_is_rejected() {
        let config: FileConfig = toml::from_str("[retry]\ndeadline_ms = 0\n").unwrap();
        assert_eq!(config.validate(), vec![ConfigValidationError::ZeroDeadline]);

        let config: FileConfig = toml::from_str("[retry]\ndeadline_ms = 1\n").unwrap();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let toml_str = r#"
[openai]
model = ""
base_url = " "
request_timeout_seconds = 0

[retry]
max_attempts = 0
deadline_ms = 0

[server]
bind = "not-an-address"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate_for_serve();
        assert_eq!(
            issues,
            vec![
                ConfigValidationError::EmptyModelName,
                ConfigValidationError::EmptyBaseUrl,
                ConfigValidationError::InvalidTimeout,
                ConfigValidationError::ZeroAttempts,
                ConfigValidationError::ZeroDeadline,
                ConfigValidationError::InvalidBindAddress("not-an-address".to_string()),
            ]
        );
    }

    #[test]
    fn test_bind_address_only_checked_for_serve() {
        let config: FileConfig = toml::from_str("[server]\nbind = \"localhost\"\n").unwrap();
        assert!(config.validate().is_empty());
        assert_eq!(
            config.validate_for_serve(),
            vec![ConfigValidationError::InvalidBindAddress("localhost".to_string())]
        );
    }
}
