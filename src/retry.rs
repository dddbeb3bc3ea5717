//! Bounded retry with exponential backoff for outbound HTTP calls.
//!
//! The default configuration performs no retries at all, preserving the
//! original single-attempt behavior unless a policy is explicitly supplied.

use std::future::Future;
use std::time::Duration;
use tracing::debug;

use crate::Result;

/// Retry configuration shared by the completion call and the lookup calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub min_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// A policy with `max_retries` additional attempts and default delays
    /// (100ms base, 2s cap).
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            min_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(2),
        }
    }

    pub fn min_delay(mut self, delay: Duration) -> Self {
        self.min_delay = delay;
        self
    }

    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Exponential backoff: `min_delay * 2^attempt`, capped at `max_delay`.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let base = self.min_delay.as_millis() as u64;
        let factor = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
        let delay = base
            .saturating_mul(factor)
            .min(self.max_delay.as_millis() as u64);
        Duration::from_millis(delay)
    }
}

/// Run `op`, retrying retryable failures until the policy is exhausted.
///
/// `attempt` is 0-based: the first failure is attempt 0. Without a policy the
/// operation runs exactly once.
pub(crate) async fn run<T, F, Fut>(policy: Option<&RetryPolicy>, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let Some(policy) = policy else {
        return op().await;
    };

    let mut attempt = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < policy.max_retries && err.is_retryable() => {
                let delay = policy.backoff_delay(attempt);
                debug!(attempt, ?delay, error = %err, "retrying after transient failure");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn transient() -> Error {
        Error::ModelUnavailable {
            status: Some(500),
            message: "boom".into(),
        }
    }

    #[test]
    fn backoff_doubles_and_caps() {
        let policy = RetryPolicy::new(5)
            .min_delay(Duration::from_millis(100))
            .max_delay(Duration::from_millis(350));
        assert_eq!(policy.backoff_delay(0), Duration::from_millis(100));
        assert_eq!(policy.backoff_delay(1), Duration::from_millis(200));
        assert_eq!(policy.backoff_delay(2), Duration::from_millis(350));
        assert_eq!(policy.backoff_delay(63), Duration::from_millis(350));
    }

    #[test]
    fn no_policy_runs_once() {
        let calls = AtomicU32::new(0);
        let result: Result<u32> = tokio_test::block_on(run(None, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(transient()) }
        }));
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn transient_failure_then_success() {
        let policy = RetryPolicy::new(2).min_delay(Duration::from_millis(1));
        let calls = AtomicU32::new(0);
        let result = run(Some(&policy), || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n == 0 {
                    Err(transient())
                } else {
                    Ok(n)
                }
            }
        })
        .await;
        assert_eq!(result.ok(), Some(1));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn non_retryable_failure_stops_immediately() {
        let policy = RetryPolicy::new(3).min_delay(Duration::from_millis(1));
        let calls = AtomicU32::new(0);
        let result: Result<()> = run(Some(&policy), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(Error::malformed("missing content")) }
        })
        .await;
        assert!(matches!(
            result,
            Err(Error::MalformedModelResponse { .. })
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn policy_bounds_the_attempt_count() {
        let policy = RetryPolicy::new(2).min_delay(Duration::from_millis(1));
        let calls = AtomicU32::new(0);
        let result: Result<()> = run(Some(&policy), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(transient()) }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
