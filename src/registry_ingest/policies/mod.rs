/// Fetch policies: how often the registry may be called and when a failed
/// call is worth repeating
pub mod rate_limit;
pub mod retry_policy;

pub use rate_limit::{RateLimitPolicy, RateLimiter};
pub use retry_policy::{BackoffPolicy, RetryPolicy, TRANSIENT_STATUS_CODES};
