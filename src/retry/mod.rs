//! Retry delay calculation.
//!
//! This module computes *when* to retry, never *what* to retry:
//!
//! - **Pure Core**: [`Strategy`] is just data, easily cloned and inspected
//! - **Forward-only**: [`DelaySequence`] hands out one delay per attempt until
//!   the retry limit or the deadline is reached
//! - **Caller-driven**: sleeping and running the operation stay with the caller
//!
//! # Quick Start
//!
//! ```rust
//! use slackwater::{Backoff, Interval, Strategy};
//! use std::time::Duration;
//!
//! let backoff = Backoff::new(
//!     Strategy::exponential()
//!         .with_retry_limit(3)
//!         .with_interval(Interval::seconds(2))
//!         .with_multiplier(2.0),
//! );
//!
//! let delays: Vec<Duration> = backoff.delays().collect();
//! assert_eq!(
//!     delays,
//!     vec![
//!         Duration::from_secs(2),
//!         Duration::from_secs(4),
//!         Duration::from_secs(8),
//!     ]
//! );
//! ```
//!
//! # Strategies
//!
//! - **Constant**: fixed delay between retries (default 5 retries, 2s)
//! - **Exponential**: `interval * multiplier^attempt` (default 3 retries, 2s, x2)
//!
//! Both accept a timeout. The deadline is taken once when the sequence is
//! created; the default [`Interval::MAX`] never expires.
//!
//! # Driving a retry loop
//!
//! ```rust,ignore
//! let mut delays = backoff.delays();
//! let result = loop {
//!     match operation() {
//!         Ok(v) => break Ok(v),
//!         Err(e) => match delays.next() {
//!             Some(delay) => std::thread::sleep(delay),
//!             None => break Err(e),
//!         },
//!     }
//! };
//! ```
//!
//! # Error Types
//!
//! - [`DelayError`]: an attempt was consumed but the interval had no finite value

mod backoff;
mod clock;
mod error;
mod interval;
mod sequence;
mod strategy;

pub use backoff::Backoff;
pub use clock::{Clock, SystemClock};
pub use error::DelayError;
pub use interval::Interval;
pub use sequence::DelaySequence;
pub use strategy::{
    Strategy, DEFAULT_CONSTANT_RETRIES, DEFAULT_EXPONENTIAL_RETRIES, DEFAULT_INTERVAL,
    DEFAULT_MULTIPLIER,
};
