//! # Slackwater
//!
//! > *"Slack water: the pause between tides"*
//!
//! A Rust library for computing retry delays.
//!
//! ## Philosophy
//!
//! **Slackwater** keeps retry policy a **pure core**:
//! - A [`Strategy`] describes the shape of the backoff and nothing else
//! - A [`DelaySequence`] turns it into a bounded, deadline-aware series of waits
//! - Running the operation and sleeping belong to the caller
//!
//! ## Quick Example
//!
//! ```rust
//! use slackwater::{Backoff, Interval, Strategy};
//! use std::time::Duration;
//!
//! let backoff = Backoff::new(
//!     Strategy::constant()
//!         .with_retry_limit(3)
//!         .with_interval(Interval::milliseconds(200))
//!         .with_timeout(Interval::seconds(30)),
//! );
//!
//! let mut attempts = 0;
//! let mut delays = backoff.delays();
//! let result: Result<&str, &str> = loop {
//!     attempts += 1;
//!     let outcome = if attempts < 3 { Err("busy") } else { Ok("done") };
//!     match outcome {
//!         Ok(v) => break Ok(v),
//!         Err(e) => match delays.next() {
//!             Some(delay) => assert_eq!(delay, Duration::from_millis(200)),
//!             None => break Err(e),
//!         },
//!     }
//! };
//!
//! assert_eq!(result, Ok("done"));
//! assert_eq!(delays.attempts(), 2);
//! ```
//!
//! ## Features
//!
//! - `tracing`: log each produced delay and the cause of exhaustion
//! - `serde`: serialize strategies for use in configuration files
//! - `proptest`: `Arbitrary` implementations for strategies and intervals

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod retry;
pub mod testing;

// Re-exports
pub use retry::{Backoff, Clock, DelayError, DelaySequence, Interval, Strategy, SystemClock};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::retry::{Backoff, DelayError, DelaySequence, Interval, Strategy};
}
