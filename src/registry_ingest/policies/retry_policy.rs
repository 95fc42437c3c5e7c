use crate::registry_ingest::domain::FetchError;
use crate::shared::Result;
use std::time::Duration;

/// HTTP statuses treated as transient: rate limiting and gateway/server trouble
pub const TRANSIENT_STATUS_CODES: [u16; 5] = [429, 500, 502, 503, 504];

/// Exponential backoff bounded by a floor and a ceiling.
///
/// The wait after attempt `n` (1-based) is `multiplier * 2^(n-1)` seconds,
/// clamped to `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackoffPolicy {
    multiplier: f64,
    min: Duration,
    max: Duration,
}

impl BackoffPolicy {
    pub fn new(multiplier: f64, min: Duration, max: Duration) -> Result<Self> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            anyhow::bail!("Backoff multiplier must be a positive number, got {}", multiplier);
        }
        if min > max {
            anyhow::bail!(
                "Backoff minimum delay ({:?}) exceeds maximum delay ({:?})",
                min,
                max
            );
        }
        Ok(Self {
            multiplier,
            min,
            max,
        })
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(63) as i32;
        let raw = self.multiplier * 2f64.powi(exponent);
        let secs = raw.min(self.max.as_secs_f64()).max(self.min.as_secs_f64());
        Duration::from_secs_f64(secs)
    }
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            multiplier: 2.0,
            min: Duration::from_secs(10),
            max: Duration::from_secs(120),
        }
    }
}

/// Bounded retry of transient upstream failures
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: BackoffPolicy,
    retryable_statuses: Vec<u16>,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: BackoffPolicy) -> Result<Self> {
        if max_attempts == 0 {
            anyhow::bail!("Retry policy needs at least one attempt");
        }
        Ok(Self {
            max_attempts,
            backoff,
            retryable_statuses: TRANSIENT_STATUS_CODES.to_vec(),
        })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn backoff(&self) -> &BackoffPolicy {
        &self.backoff
    }

    /// Whether `error` is worth another attempt. Status codes outside the
    /// transient set, undecodable bodies and unbuildable requests never are.
    pub fn is_retryable(&self, error: &FetchError) -> bool {
        match error {
            FetchError::Status { status, .. } => self.retryable_statuses.contains(status),
            FetchError::Network { .. } => true,
            FetchError::Decode { .. } | FetchError::InvalidRequest { .. } => false,
        }
    }

    /// Returns the wait before the next attempt, or `None` when `error` after
    /// `attempt` must be surfaced.
    pub fn next_delay(&self, attempt: u32, error: &FetchError) -> Option<Duration> {
        if attempt >= self.max_attempts || !self.is_retryable(error) {
            return None;
        }
        Some(self.backoff.delay_for(attempt))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            backoff: BackoffPolicy::default(),
            retryable_statuses: TRANSIENT_STATUS_CODES.to_vec(),
        }
    }
}
