//! Retry and error-reporting policy wrapped around every request.

use std::time::Duration;

use rand::Rng;

use crate::config::ApiConfig;
use crate::graphql::error::GraphQLError;

/// Upper bound on a single backoff sleep.
const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each further retry.
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn should_retry(&self, error: &GraphQLError, retries_done: u32) -> bool {
        retries_done < self.max_retries && error.is_retryable()
    }

    /// Exponential ceiling for the given retry (1-based), before jitter.
    pub fn ceiling(&self, retry: u32) -> Duration {
        let factor = 1u32.checked_shl(retry.saturating_sub(1)).unwrap_or(u32::MAX);
        self.base_delay
            .checked_mul(factor)
            .unwrap_or(MAX_RETRY_DELAY)
            .min(MAX_RETRY_DELAY)
    }

    /// Sleep before the given retry: uniform in `[ceiling / 2, ceiling]`.
    pub fn delay_for(&self, retry: u32) -> Duration {
        let ceiling = self.ceiling(retry);
        if ceiling.is_zero() {
            return ceiling;
        }
        let ceiling_ms = ceiling.as_millis() as u64;
        let jittered = rand::thread_rng().gen_range(ceiling_ms / 2..=ceiling_ms);
        Duration::from_millis(jittered)
    }
}

impl From<&ApiConfig> for RetryPolicy {
    fn from(api: &ApiConfig) -> Self {
        Self {
            max_retries: api.retry_attempts,
            base_delay: Duration::from_millis(api.retry_delay_ms),
        }
    }
}

/// Error link: the single place failures are logged.
pub(crate) fn report(operation: &str, error: &GraphQLError) {
    match error {
        GraphQLError::Graphql(entries) => {
            for entry in entries {
                tracing::warn!(
                    operation,
                    path = ?entry.path,
                    "[GraphQL error]: {}",
                    entry.message
                );
            }
        }
        err if err.is_network() => {
            tracing::error!(operation, kind = err.error_type(), "[Network error]: {}", err);
        }
        err => {
            tracing::error!(operation, kind = err.error_type(), "GraphQL request failed: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> RetryPolicy {
        RetryPolicy {
            max_retries: 3,
            base_delay: Duration::from_millis(100),
        }
    }

    #[test]
    fn ceiling_doubles_per_retry() {
        let policy = policy();
        assert_eq!(policy.ceiling(1), Duration::from_millis(100));
        assert_eq!(policy.ceiling(2), Duration::from_millis(200));
        assert_eq!(policy.ceiling(3), Duration::from_millis(400));
    }

    #[test]
    fn ceiling_is_capped() {
        assert_eq!(policy().ceiling(40), MAX_RETRY_DELAY);
    }

    #[test]
    fn jitter_stays_within_bounds() {
        let policy = policy();
        for _ in 0..50 {
            let delay = policy.delay_for(2);
            assert!(delay >= Duration::from_millis(100));
            assert!(delay <= Duration::from_millis(200));
        }
    }

    #[test]
    fn gives_up_after_budget() {
        let policy = policy();
        let err = GraphQLError::Server { status: 502 };
        assert!(policy.should_retry(&err, 0));
        assert!(policy.should_retry(&err, 2));
        assert!(!policy.should_retry(&err, 3));
        assert!(!policy.should_retry(&GraphQLError::Unauthorized { status: 401 }, 0));
    }
}
