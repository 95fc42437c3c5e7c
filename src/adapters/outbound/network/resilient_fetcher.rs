use crate::ports::outbound::{Clock, HttpFetcher};
use crate::registry_ingest::domain::FetchError;
use crate::registry_ingest::policies::{RateLimitPolicy, RateLimiter, RetryPolicy};
use serde_json::Value;
use std::cell::RefCell;
use tracing::{debug, warn};

/// Decorator adding rate limiting and retry to any [`HttpFetcher`].
///
/// Every attempt, first tries and retries alike, takes a rate-limiter slot.
/// Transient failures are retried per the [`RetryPolicy`]; everything else,
/// and the last transient failure once attempts run out, is returned as-is.
pub struct ResilientFetcher<F, C> {
    inner: F,
    clock: C,
    limiter: RefCell<RateLimiter>,
    retry: RetryPolicy,
}

impl<F: HttpFetcher, C: Clock> ResilientFetcher<F, C> {
    pub fn new(inner: F, clock: C, rate_limit: RateLimitPolicy, retry: RetryPolicy) -> Self {
        Self {
            inner,
            clock,
            limiter: RefCell::new(RateLimiter::new(rate_limit)),
            retry,
        }
    }

    fn wait_for_slot(&self) {
        let wait = self.limiter.borrow_mut().reserve(self.clock.now());
        if !wait.is_zero() {
            let wait_secs = wait.as_secs_f64();
            debug!(wait_secs, "rate limit reached, waiting");
            self.clock.sleep(wait);
        }
    }
}

impl<F: HttpFetcher, C: Clock> HttpFetcher for ResilientFetcher<F, C> {
    fn get_json(&self, url: &str, params: &[(String, String)]) -> Result<Value, FetchError> {
        let mut attempt = 1;
        loop {
            self.wait_for_slot();

            let error = match self.inner.get_json(url, params) {
                Ok(value) => return Ok(value),
                Err(error) => error,
            };

            let Some(delay) = self.retry.next_delay(attempt, &error) else {
                return Err(error);
            };

            warn!(
                attempt,
                max_attempts = self.retry.max_attempts(),
                delay_secs = delay.as_secs_f64(),
                error = %error,
                "transient registry failure, retrying"
            );
            self.clock.sleep(delay);
            attempt += 1;
        }
    }
}
