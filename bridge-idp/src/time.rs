//! Time Abstraction
//!
//! Injectable time source so token-expiry decisions are deterministic under
//! test.

use chrono::{DateTime, Utc};

/// Time source trait.
///
/// # Example
///
/// ```
/// use bridge_idp::time::{Clock, SystemClock};
///
/// fn seconds_since_epoch(clock: &dyn Clock) -> i64 {
///     clock.unix_timestamp()
/// }
///
/// assert!(seconds_since_epoch(&SystemClock) > 0);
/// ```
pub trait Clock: Send + Sync {
    /// Get current UTC time
    fn now(&self) -> DateTime<Utc>;

    /// Get current Unix timestamp in seconds
    fn unix_timestamp(&self) -> i64 {
        self.now().timestamp()
    }
}

/// System clock implementation using actual system time
#[derive(Debug, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
