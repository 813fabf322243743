//! The forward-only delay generator.

use std::time::{Duration, Instant};

use super::clock::{Clock, SystemClock};
use super::error::DelayError;
use super::strategy::Strategy;

/// A finite, non-restartable sequence of retry delays.
///
/// Created from a [`Strategy`], usually through
/// [`Backoff::delays`](super::Backoff::delays). The deadline is fixed once, at
/// construction, as `now + strategy.timeout()`; it is never recomputed.
///
/// Each advance first checks that the deadline has not passed and that fewer
/// than `maximum_retries` delays were handed out (a limit of zero means the
/// sequence is exhausted from the start). A failed check ends the sequence
/// without touching the attempt counter. A passing check always consumes one
/// attempt, even if the delay turns out to have no finite value.
///
/// The sequence is owned by one caller and advanced through `&mut self`.
/// Start a new campaign by building a new sequence.
///
/// # Examples
///
/// ```rust
/// use slackwater::{Backoff, Interval, Strategy};
/// use std::time::Duration;
///
/// let backoff = Backoff::new(
///     Strategy::constant()
///         .with_retry_limit(2)
///         .with_interval(Interval::milliseconds(500)),
/// );
///
/// let delays: Vec<Duration> = backoff.delays().collect();
/// assert_eq!(delays, vec![Duration::from_millis(500); 2]);
/// ```
#[derive(Debug)]
pub struct DelaySequence<C = SystemClock> {
    attempts: u32,
    strategy: Strategy,
    deadline: Option<Instant>,
    clock: C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exhaustion {
    Deadline,
    RetryLimit,
}

impl DelaySequence<SystemClock> {
    /// Start a sequence on the system clock.
    pub fn new(strategy: Strategy) -> Self {
        Self::with_clock(strategy, SystemClock)
    }
}

impl<C: Clock> DelaySequence<C> {
    /// Start a sequence that reads time from `clock`.
    ///
    /// A deadline that does not fit in an [`Instant`] (including
    /// [`Interval::Never`](super::Interval::Never) and the default
    /// [`Interval::MAX`](super::Interval::MAX)) means no deadline.
    pub fn with_clock(strategy: Strategy, clock: C) -> Self {
        let deadline = strategy.timeout().checked_after(clock.now());
        Self {
            attempts: 0,
            strategy,
            deadline,
            clock,
        }
    }

    fn exhaustion(&self) -> Option<Exhaustion> {
        if let Some(deadline) = self.deadline {
            if self.clock.now() > deadline {
                return Some(Exhaustion::Deadline);
            }
        }
        let max = self.strategy.maximum_retries();
        if max == 0 || self.attempts >= max {
            return Some(Exhaustion::RetryLimit);
        }
        None
    }

    /// Advance, distinguishing "exhausted" from "no finite delay".
    ///
    /// - `None`: the sequence is exhausted; the attempt counter is unchanged.
    /// - `Some(Ok(delay))`: wait `delay` before the next attempt.
    /// - `Some(Err(_))`: an attempt was consumed but the base interval has
    ///   no finite value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slackwater::{Backoff, Strategy};
    /// use std::time::Duration;
    ///
    /// let mut delays = Backoff::new(Strategy::exponential().with_retry_limit(1)).delays();
    ///
    /// assert_eq!(delays.try_next(), Some(Ok(Duration::from_secs(2))));
    /// assert_eq!(delays.try_next(), None);
    /// ```
    pub fn try_next(&mut self) -> Option<Result<Duration, DelayError>> {
        if let Some(_cause) = self.exhaustion() {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                attempts = self.attempts,
                cause = ?_cause,
                "delay sequence exhausted"
            );
            return None;
        }

        let attempt = self.attempts;
        self.attempts += 1;

        match self.strategy.delay_for_attempt(attempt) {
            Some(delay) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(attempt, delay = ?delay, "next retry delay");
                Some(Ok(delay))
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(attempt, "retry interval has no finite value");
                Some(Err(DelayError::Unrepresentable { attempt }))
            }
        }
    }

    /// Advance and return the delay in whole nanoseconds.
    ///
    /// Delays longer than `u64::MAX` nanoseconds saturate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slackwater::Backoff;
    ///
    /// let mut delays = Backoff::default().delays();
    /// assert_eq!(delays.next_nanos(), Some(2_000_000_000));
    /// assert_eq!(delays.next_nanos(), Some(4_000_000_000));
    /// assert_eq!(delays.next_nanos(), Some(8_000_000_000));
    /// assert_eq!(delays.next_nanos(), None);
    /// ```
    pub fn next_nanos(&mut self) -> Option<u64> {
        self.next()
            .map(|delay| u64::try_from(delay.as_nanos()).unwrap_or(u64::MAX))
    }

    /// Returns true if the next advance would end the sequence.
    pub fn is_exhausted(&self) -> bool {
        self.exhaustion().is_some()
    }

    /// Convert into a [`futures::Stream`] of the same delays.
    ///
    /// The stream never sleeps; awaiting each delay stays with the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use futures::StreamExt;
    /// use slackwater::Backoff;
    /// use std::time::Duration;
    ///
    /// # tokio_test::block_on(async {
    /// let delays: Vec<Duration> = Backoff::default().delays().into_stream().collect().await;
    /// assert_eq!(delays.len(), 3);
    /// # });
    /// ```
    pub fn into_stream(self) -> futures::stream::Iter<Self> {
        futures::stream::iter(self)
    }
}

impl<C> DelaySequence<C> {
    /// Number of attempts consumed so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Attempts left before the retry limit, ignoring the deadline.
    pub fn remaining(&self) -> u32 {
        self.strategy.maximum_retries().saturating_sub(self.attempts)
    }

    /// The absolute deadline, or `None` when the timeout is unbounded.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// The strategy captured at construction.
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }
}

impl<C: Clock> Iterator for DelaySequence<C> {
    type Item = Duration;

    /// Next delay, or `None` when exhausted or the delay has no finite value.
    fn next(&mut self) -> Option<Duration> {
        self.try_next().and_then(Result::ok)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining() as usize))
    }
}

#[cfg(test)]
mod sequence_tests {
    use super::*;
    use crate::retry::Interval;
    use crate::testing::ManualClock;

    #[test]
    fn test_counter_untouched_when_exhausted() {
        let mut delays = DelaySequence::new(Strategy::constant().with_retry_limit(1));
        assert!(delays.next().is_some());
        assert_eq!(delays.attempts(), 1);
        assert!(delays.next().is_none());
        assert!(delays.next().is_none());
        assert_eq!(delays.attempts(), 1);
    }

    #[test]
    fn test_zero_limit_never_counts() {
        let mut delays = DelaySequence::new(Strategy::exponential().with_retry_limit(0));
        assert!(delays.is_exhausted());
        assert_eq!(delays.try_next(), None);
        assert_eq!(delays.attempts(), 0);
    }

    #[test]
    fn test_never_interval_consumes_attempts() {
        let mut delays = DelaySequence::new(
            Strategy::exponential()
                .with_retry_limit(2)
                .with_interval(Interval::Never),
        );
        assert_eq!(
            delays.try_next(),
            Some(Err(DelayError::Unrepresentable { attempt: 0 }))
        );
        assert_eq!(delays.next(), None);
        assert_eq!(delays.attempts(), 2);
        assert_eq!(delays.try_next(), None);
        assert_eq!(delays.attempts(), 2);
    }

    #[test]
    fn test_unbounded_timeout_has_no_deadline() {
        let delays = DelaySequence::new(Strategy::constant());
        assert_eq!(delays.deadline(), None);

        let never = DelaySequence::new(Strategy::constant().with_timeout(Interval::Never));
        assert_eq!(never.deadline(), None);
    }

    #[test]
    fn test_deadline_fixed_at_construction() {
        let clock = ManualClock::new();
        let start = clock.now();
        let mut delays = DelaySequence::with_clock(
            Strategy::constant().with_timeout(Interval::seconds(10)),
            clock.clone(),
        );
        assert_eq!(delays.deadline(), Some(start + Duration::from_secs(10)));

        clock.advance(Duration::from_secs(4));
        assert!(delays.next().is_some());
        assert_eq!(delays.deadline(), Some(start + Duration::from_secs(10)));
    }

    #[test]
    fn test_deadline_is_inclusive() {
        let clock = ManualClock::new();
        let mut delays = DelaySequence::with_clock(
            Strategy::constant().with_timeout(Interval::seconds(1)),
            clock.clone(),
        );
        clock.advance(Duration::from_secs(1));
        assert!(delays.next().is_some());
        clock.advance(Duration::from_nanos(1));
        assert!(delays.next().is_none());
        assert_eq!(delays.attempts(), 1);
    }

    #[test]
    fn test_zero_timeout_admits_first_advance_on_frozen_clock() {
        let clock = ManualClock::new();
        let mut delays = DelaySequence::with_clock(
            Strategy::exponential().with_timeout(Interval::ZERO),
            clock.clone(),
        );
        assert_eq!(delays.deadline(), Some(clock.now()));
        assert_eq!(delays.next(), Some(Duration::from_secs(2)));
        assert_eq!(delays.next(), Some(Duration::from_secs(4)));

        clock.advance(Duration::from_nanos(1));
        assert!(delays.is_exhausted());
        assert_eq!(delays.next(), None);
        assert_eq!(delays.attempts(), 2);
    }

    #[test]
    fn test_remaining_and_size_hint() {
        let mut delays = DelaySequence::new(Strategy::constant().with_retry_limit(3));
        assert_eq!(delays.remaining(), 3);
        assert_eq!(delays.size_hint(), (0, Some(3)));
        delays.next();
        assert_eq!(delays.remaining(), 2);
        delays.by_ref().for_each(drop);
        assert_eq!(delays.remaining(), 0);
    }

    #[test]
    fn test_next_nanos_saturates() {
        let mut delays = DelaySequence::new(
            Strategy::constant()
                .with_retry_limit(1)
                .with_interval(Interval::MAX),
        );
        assert_eq!(delays.next_nanos(), Some(u64::MAX));
    }

    #[test]
    fn test_strategy_is_captured() {
        let strategy = Strategy::constant().with_retry_limit(7);
        let delays = DelaySequence::new(strategy);
        assert_eq!(delays.strategy(), &strategy);
    }

    #[test]
    fn test_sequence_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<DelaySequence>();
        assert_send::<DelaySequence<ManualClock>>();
    }
}
