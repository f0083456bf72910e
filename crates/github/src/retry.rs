//! Status-code retry policy for REST calls.
//!
//! A request that fails with a status in `[400, 600)` is retried unless the
//! status is in the exempt set. The wait before retry `n` (1-based) is zero
//! for the first retry and `factor * 2^(n-1)` afterwards, capped at
//! [`MAX_BACKOFF`].

use std::collections::BTreeSet;
use std::time::Duration;

use toolkit::RetryPolicy;

/// Statuses never retried unless the caller supplies its own exempt set.
pub const DEFAULT_EXEMPT_STATUS_CODES: [u16; 5] = [400, 401, 403, 404, 422];

/// Upper bound on a single back-off wait.
pub const MAX_BACKOFF: Duration = Duration::from_secs(120);

const RETRYABLE_RANGE: std::ops::Range<u16> = 400..600;

/// How many times, and after which failures, a REST call is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrySettings {
    retries: u32,
    exempt: BTreeSet<u16>,
    backoff_factor: Duration,
}

impl RetrySettings {
    /// `retries` extra attempts; `exempt` replaces the default exempt set when
    /// given.
    pub fn new(retries: u32, exempt: Option<Vec<u16>>) -> Self {
        let exempt = match exempt {
            Some(codes) => codes.into_iter().collect(),
            None => DEFAULT_EXEMPT_STATUS_CODES.into_iter().collect(),
        };
        Self {
            retries,
            exempt,
            backoff_factor: Duration::from_secs(1),
        }
    }

    /// No retries at all.
    pub fn disabled() -> Self {
        Self::new(0, None)
    }

    /// Overrides the one-second back-off factor.
    pub fn with_backoff_factor(mut self, factor: Duration) -> Self {
        self.backoff_factor = factor;
        self
    }

    /// How many times a failed request is retried.
    pub fn retries(&self) -> u32 {
        self.retries
    }

    /// Status codes that are never retried, in ascending order.
    pub fn exempt_status_codes(&self) -> impl Iterator<Item = u16> + '_ {
        self.exempt.iter().copied()
    }

    /// Decides whether another attempt is allowed after `failures` failed
    /// attempts, the last of which ended with `status`.
    pub fn policy_for(&self, status: Option<u16>, failures: u32) -> RetryPolicy {
        if failures == 0 || failures > self.retries {
            return RetryPolicy::NonRetryable;
        }
        match status {
            Some(code) if RETRYABLE_RANGE.contains(&code) && !self.exempt.contains(&code) => {
                RetryPolicy::Retryable {
                    after: self.backoff(failures),
                }
            }
            _ => RetryPolicy::NonRetryable,
        }
    }

    fn backoff(&self, failures: u32) -> Option<Duration> {
        if failures <= 1 {
            return None;
        }
        let multiplier = 2u32.saturating_pow(failures - 1);
        Some(self.backoff_factor.saturating_mul(multiplier).min(MAX_BACKOFF))
    }
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self::disabled()
    }
}
