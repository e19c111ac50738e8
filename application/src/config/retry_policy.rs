//! Retry policy for upstream completion calls.
//!
//! Backoff is linear: the n-th retry waits `base_delay × n`. Jitter and an
//! overall deadline are available but off by default, so out of the box the
//! schedule is fully deterministic (250 ms, then 500 ms).

use rand::Rng;
use std::time::Duration;

/// Bounded retry with linear backoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one. Values below 1 behave as 1.
    pub max_attempts: u32,
    /// Backoff unit; the n-th retry waits `base_delay * n`.
    pub base_delay: Duration,
    /// Upper bound of uniform random delay added to each backoff.
    pub jitter: Duration,
    /// Limit for the whole call, retries and backoff included.
    pub deadline: Option<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(250),
            jitter: Duration::ZERO,
            deadline: None,
        }
    }
}

impl RetryPolicy {
    // ==================== Builder Methods ====================

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    pub fn with_jitter(mut self, jitter: Duration) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    // ==================== Queries ====================

    /// Attempt budget, never less than one
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Delay to wait before retry number `retry` (1-based)
    pub fn delay_before_retry(&self, retry: u32) -> Duration {
        let linear = self.base_delay.saturating_mul(retry);
        if self.jitter.is_zero() {
            return linear;
        }
        let max_jitter = u64::try_from(self.jitter.as_millis()).unwrap_or(u64::MAX);
        let extra = rand::thread_rng().gen_range(0..=max_jitter);
        linear.saturating_add(Duration::from_millis(extra))
    }

    /// 429 and every 5xx are worth another attempt
    pub fn is_transient(status: u16) -> bool {
        status == 429 || (500..=599).contains(&status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.base_delay, Duration::from_millis(250));
        assert!(policy.jitter.is_zero());
        assert!(policy.deadline.is_none());
    }

    #[test]
    fn test_linear_backoff() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_before_retry(1), Duration::from_millis(250));
        assert_eq!(policy.delay_before_retry(2), Duration::from_millis(500));
    }

    #[test]
    fn test_jitter_stays_in_bounds() {
        let policy = RetryPolicy::default().with_jitter(Duration::from_millis(100));
        for _ in 0..50 {
            let delay = policy.delay_before_retry(2);
            assert!(delay >= Duration::from_millis(500));
            assert!(delay <= Duration::from_millis(600));
        }
    }

    #[test]
    fn test_attempts_floor() {
        assert_eq!(RetryPolicy::default().with_max_attempts(0).attempts(), 1);
        assert_eq!(RetryPolicy::default().with_max_attempts(5).attempts(), 5);
    }

    #[test]
    fn test_transient_statuses() {
        assert!(RetryPolicy::is_transient(429));
        assert!(RetryPolicy::is_transient(500));
        assert!(RetryPolicy::is_transient(503));
        assert!(!RetryPolicy::is_transient(400));
        assert!(!RetryPolicy::is_transient(401));
        assert!(!RetryPolicy::is_transient(404));
        assert!(!RetryPolicy::is_transient(200));
    }
}
