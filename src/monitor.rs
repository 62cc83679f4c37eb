//! Wall-clock deadline for long-running searches.
//!
//! Branch and bound is exponential in the worst case and the genetic
//! algorithm runs for up to a thousand generations, so both accept an
//! optional [`TimeLimit`] that is polled between iterations. The clock is
//! only read every `clock_check_mask + 1` steps to keep polling cheap.

use std::time::{Duration, Instant};

/// A step-filtered wall-clock deadline.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use u_cover::monitor::TimeLimit;
///
/// let mut limit = TimeLimit::new(Some(Duration::from_secs(60)));
/// assert!(!limit.step());
///
/// let mut unlimited = TimeLimit::unlimited();
/// assert!(!unlimited.step());
/// ```
#[derive(Debug, Clone)]
pub struct TimeLimit {
    limit: Option<Duration>,
    start: Instant,
    steps: u64,
    clock_check_mask: u64,
    expired: bool,
}

impl TimeLimit {
    /// Default mask: read the clock every 1,024 steps.
    const DEFAULT_CLOCK_CHECK_MASK: u64 = 0x3FF;

    /// Starts a deadline `limit` from now. `None` never expires.
    pub fn new(limit: Option<Duration>) -> Self {
        Self::with_clock_check_mask(limit, Self::DEFAULT_CLOCK_CHECK_MASK)
    }

    /// A deadline that never expires.
    pub fn unlimited() -> Self {
        Self::new(None)
    }

    /// Starts a deadline with a custom clock check mask.
    ///
    /// A mask of `0` reads the clock on every step.
    pub fn with_clock_check_mask(limit: Option<Duration>, clock_check_mask: u64) -> Self {
        Self {
            limit,
            start: Instant::now(),
            steps: 0,
            clock_check_mask,
            expired: false,
        }
    }

    /// Records one step and reports whether the deadline has passed.
    ///
    /// Once expired, stays expired.
    #[inline]
    pub fn step(&mut self) -> bool {
        if self.expired {
            return true;
        }
        let Some(limit) = self.limit else {
            return false;
        };
        let check = self.steps & self.clock_check_mask == 0;
        self.steps = self.steps.wrapping_add(1);
        if check && self.start.elapsed() >= limit {
            self.expired = true;
        }
        self.expired
    }

    /// Whether a previous [`step`](Self::step) observed expiry.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Configured limit.
    pub fn limit(&self) -> Option<Duration> {
        self.limit
    }

    /// Time since the deadline was started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
