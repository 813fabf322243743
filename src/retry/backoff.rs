//! Factory for delay sequences.

use super::clock::{Clock, SystemClock};
use super::sequence::DelaySequence;
use super::strategy::Strategy;

/// Hands out a fresh [`DelaySequence`] for every retry campaign.
///
/// A `Backoff` is plain data around a [`Strategy`]. Each call to
/// [`delays`](Backoff::delays) starts from attempt 0 with a new deadline, so
/// one `Backoff` can pace any number of independent campaigns.
///
/// The default is [`Strategy::exponential`] with its default parameters.
///
/// # Examples
///
/// ```rust
/// use slackwater::Backoff;
/// use std::time::Duration;
///
/// let backoff = Backoff::default();
///
/// for delay in &backoff {
///     // call the operation, stop on success, otherwise wait `delay`
///     assert!(delay >= Duration::from_secs(2));
/// }
///
/// // A second campaign starts over.
/// assert_eq!(backoff.delays().next(), Some(Duration::from_secs(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Backoff {
    strategy: Strategy,
}

impl Backoff {
    /// Wrap a strategy.
    pub const fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// The wrapped strategy.
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Start a new campaign on the system clock.
    pub fn delays(&self) -> DelaySequence<SystemClock> {
        DelaySequence::new(self.strategy)
    }

    /// Start a new campaign that reads time from `clock`.
    pub fn delays_with_clock<C: Clock>(&self, clock: C) -> DelaySequence<C> {
        DelaySequence::with_clock(self.strategy, clock)
    }
}

impl From<Strategy> for Backoff {
    fn from(strategy: Strategy) -> Self {
        Self::new(strategy)
    }
}

impl IntoIterator for &Backoff {
    type Item = std::time::Duration;
    type IntoIter = DelaySequence<SystemClock>;

    fn into_iter(self) -> Self::IntoIter {
        self.delays()
    }
}
