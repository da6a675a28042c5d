//! Attempt budget for one call.

use std::time::Duration;

use tokio::time::Instant;

use dynoclient_core::ClientConfig;

/// When to stop retrying.
///
/// The first attempt always runs. Another attempt runs while fewer than
/// `min_attempts` have run, or while the next attempt would start (after
/// `delay`) before `total` has elapsed since the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts made regardless of elapsed time.
    pub min_attempts: u32,
    /// Elapsed-time budget measured from the first attempt.
    pub total: Duration,
    /// Pause between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            min_attempts: 5,
            total: Duration::from_secs(5),
            delay: Duration::from_millis(200),
        }
    }
}

impl From<&ClientConfig> for RetryPolicy {
    fn from(config: &ClientConfig) -> Self {
        Self {
            min_attempts: config.retry_min_attempts,
            total: config.retry_total(),
            delay: config.retry_delay(),
        }
    }
}

impl RetryPolicy {
    /// A policy that makes exactly one attempt.
    #[must_use]
    pub fn no_retry() -> Self {
        Self {
            min_attempts: 1,
            total: Duration::ZERO,
            delay: Duration::ZERO,
        }
    }

    /// Start tracking attempts of one call.
    #[must_use]
    pub fn start(&self) -> Attempts {
        Attempts {
            policy: *self,
            started: Instant::now(),
            made: 0,
        }
    }
}

/// Attempt counter for one call.
#[derive(Debug, Clone)]
pub struct Attempts {
    policy: RetryPolicy,
    started: Instant,
    made: u32,
}

impl Attempts {
    /// Whether another attempt may run, recording it if so.
    ///
    /// Returns `true` unconditionally the first time.
    pub fn next_attempt(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.record();
        true
    }

    /// Record an attempt already approved by [`has_next`](Self::has_next).
    ///
    /// Used when the caller sleeps between the check and the attempt.
    pub fn record(&mut self) {
        self.made += 1;
    }

    /// Whether [`next_attempt`](Self::next_attempt) would return `true`, without recording.
    #[must_use]
    pub fn has_next(&self) -> bool {
        if self.made == 0 || self.made < self.policy.min_attempts {
            return true;
        }
        Instant::now() + self.policy.delay < self.started + self.policy.total
    }

    /// Attempts made so far.
    #[must_use]
    pub fn made(&self) -> u32 {
        self.made
    }

    /// Pause before the next attempt.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.policy.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_should_always_make_first_attempt() {
        let mut attempts = RetryPolicy::no_retry().start();
        assert!(attempts.next_attempt());
        assert!(!attempts.next_attempt());
        assert_eq!(attempts.made(), 1);

        let zero = RetryPolicy {
            min_attempts: 0,
            total: Duration::ZERO,
            delay: Duration::ZERO,
        };
        let mut attempts = zero.start();
        assert!(attempts.next_attempt());
        assert!(!attempts.next_attempt());
    }

    #[tokio::test(start_paused = true)]
    async fn test_should_make_min_attempts_even_past_budget() {
        let policy = RetryPolicy {
            min_attempts: 3,
            total: Duration::from_millis(10),
            delay: Duration::from_millis(100),
        };
        let mut attempts = policy.start();
        for _ in 0..3 {
            assert!(attempts.next_attempt());
            tokio::time::advance(policy.delay).await;
        }
        assert!(!attempts.next_attempt());
        assert_eq!(attempts.made(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_should_keep_going_within_time_budget() {
        let policy = RetryPolicy {
            min_attempts: 1,
            total: Duration::from_secs(1),
            delay: Duration::from_millis(200),
        };
        let mut attempts = policy.start();
        let mut made = 0;
        while attempts.next_attempt() {
            made += 1;
            tokio::time::advance(policy.delay).await;
        }
        // Attempts start at 0, 200, 400 and 600 ms; the next would start at
        // 1000 ms, which is not before the budget ends.
        assert_eq!(made, 4);
    }

    #[test]
    fn test_should_build_policy_from_config() {
        let config = ClientConfig::builder()
            .retry_min_attempts(2)
            .retry_total_ms(750)
            .retry_delay_ms(25)
            .build();
        let policy = RetryPolicy::from(&config);
        assert_eq!(policy.min_attempts, 2);
        assert_eq!(policy.total, Duration::from_millis(750));
        assert_eq!(policy.delay, Duration::from_millis(25));
        assert_eq!(RetryPolicy::default(), RetryPolicy::from(&ClientConfig::default()));
    }
}
