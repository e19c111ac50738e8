//! Retry configuration from TOML (`[retry]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;
use triage_application::RetryPolicy;

/// Upstream retry settings.
///
/// Defaults reproduce the fixed schedule: 3 attempts, 250 ms linear
/// backoff, no jitter, no overall deadline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    /// Total attempts including the first.
    pub max_attempts: u32,
    /// Backoff unit in milliseconds; the n-th retry waits n times this.
    pub base_delay_ms: u64,
    /// Maximum random extra delay per retry, in milliseconds (0 = off).
    pub jitter_ms: u64,
    /// Limit for the whole call including retries, in milliseconds.
    pub deadline_ms: Option<u64>,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 250,
            jitter_ms: 0,
            deadline_ms: None,
        }
    }
}

impl FileRetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy::default()
            .with_max_attempts(self.max_attempts)
            .with_base_delay(Duration::from_millis(self.base_delay_ms))
            .with_jitter(Duration::from_millis(self.jitter_ms))
            .with_deadline(self.deadline_ms.map(Duration::from_millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_matches_application_default() {
        assert_eq!(FileRetryConfig::default().to_policy(), RetryPolicy::default());
    }
}
