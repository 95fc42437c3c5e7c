use crate::shared::Result;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// At most `max_calls` calls in any rolling window of `period`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub max_calls: u32,
    pub period: Duration,
}

impl RateLimitPolicy {
    pub fn new(max_calls: u32, period: Duration) -> Result<Self> {
        if max_calls == 0 {
            anyhow::bail!("Rate limit must allow at least one call per period");
        }
        Ok(Self { max_calls, period })
    }
}

impl Default for RateLimitPolicy {
    /// Five calls per minute keeps well clear of the registry's throttling.
    fn default() -> Self {
        Self {
            max_calls: 5,
            period: Duration::from_secs(60),
        }
    }
}

/// Sliding-window limiter.
///
/// The limiter never sleeps itself: [`RateLimiter::reserve`] returns how long
/// the caller has to wait, and already counts the call at that future instant.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    policy: RateLimitPolicy,
    calls: VecDeque<Instant>,
}

impl RateLimiter {
    pub fn new(policy: RateLimitPolicy) -> Self {
        Self {
            policy,
            calls: VecDeque::with_capacity(policy.max_calls as usize),
        }
    }

    pub fn policy(&self) -> RateLimitPolicy {
        self.policy
    }

    /// Reserves a slot for one call made no earlier than `now`.
    pub fn reserve(&mut self, now: Instant) -> Duration {
        let period = self.policy.period;
        while let Some(oldest) = self.calls.front() {
            if now.saturating_duration_since(*oldest) >= period {
                self.calls.pop_front();
            } else {
                break;
            }
        }

        if self.calls.len() < self.policy.max_calls as usize {
            self.calls.push_back(now);
            return Duration::ZERO;
        }

        // Window is full: the call goes out when the oldest one expires.
        let oldest = self.calls.pop_front().unwrap_or(now);
        let slot = oldest + period;
        self.calls.push_back(slot);
        slot.saturating_duration_since(now)
    }
}
