//! Testing utilities for code that consumes delay sequences.
//!
//! This module provides a manually driven clock, assertion macros and
//! property-based testing support.
//!
//! # Examples
//!
//! ## ManualClock
//!
//! ```rust
//! use slackwater::testing::ManualClock;
//! use slackwater::{Backoff, Interval, Strategy};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let backoff = Backoff::new(Strategy::constant().with_timeout(Interval::seconds(5)));
//! let mut delays = backoff.delays_with_clock(clock.clone());
//!
//! assert!(delays.next().is_some());
//! clock.advance(Duration::from_secs(6));
//! assert!(delays.next().is_none());
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use slackwater::{assert_delays, assert_exhausted, Backoff, Interval, Strategy};
//! use std::time::Duration;
//!
//! let backoff = Backoff::new(
//!     Strategy::constant()
//!         .with_retry_limit(2)
//!         .with_interval(Interval::milliseconds(500)),
//! );
//!
//! let mut delays = backoff.delays();
//! assert_delays!(delays, [Duration::from_millis(500), Duration::from_millis(500)]);
//! assert_exhausted!(delays);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::retry::Clock;

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give the
/// other to a [`DelaySequence`](crate::DelaySequence).
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed_nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock frozen at the current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed_nanos: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Move time forward by `by`. Saturates at `u64::MAX` nanoseconds past
    /// the origin.
    pub fn advance(&self, by: Duration) {
        let by = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        self.elapsed_nanos
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                Some(n.saturating_add(by))
            })
            .ok();
    }

    /// Total time advanced since creation.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_nanos.load(Ordering::SeqCst))
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }
}

/// Assert that a sequence yields exactly the given delays, in order.
///
/// Does not check what follows; pair with [`assert_exhausted!`].
#[macro_export]
macro_rules! assert_delays {
    ($sequence:expr, [$($delay:expr),* $(,)?]) => {{
        $(
            match $sequence.next() {
                Some(actual) => assert_eq!(actual, $delay),
                None => panic!("Expected delay {:?}, got exhaustion", $delay),
            }
        )*
    }};
}

/// Assert that a sequence is exhausted and stays exhausted.
#[macro_export]
macro_rules! assert_exhausted {
    ($sequence:expr) => {{
        let before = $sequence.attempts();
        match $sequence.try_next() {
            None => {}
            Some(step) => panic!("Expected exhaustion, got {:?}", step),
        }
        if $sequence.try_next().is_some() {
            panic!("Expected exhaustion to be terminal");
        }
        assert_eq!(
            $sequence.attempts(),
            before,
            "exhausted advances must not consume attempts"
        );
    }};
}
