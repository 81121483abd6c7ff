pub mod client_id;
pub mod clock;
pub mod limiter;
pub mod store;

pub use client_id::client_identifier;
pub use limiter::{RateLimitDecision, RateLimiter};
