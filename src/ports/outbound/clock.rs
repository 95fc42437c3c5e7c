use std::time::{Duration, Instant};

/// Clock port: the only way the pipeline observes or spends time.
///
/// Rate-limit waits, retry backoff and the inter-page delay all sleep through
/// this trait, so tests can substitute a clock that advances instantly.
pub trait Clock {
    fn now(&self) -> Instant;

    fn sleep(&self, duration: Duration);
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }

    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}
