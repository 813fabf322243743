//! Error types for delay sequences.

/// A step that consumed an attempt but produced no delay.
///
/// Returned by [`DelaySequence::try_next`](super::DelaySequence::try_next).
/// The plain [`Iterator`] surface folds this case into `None`.
///
/// # Examples
///
/// ```rust
/// use slackwater::{Backoff, DelayError, Interval, Strategy};
///
/// let backoff = Backoff::new(Strategy::constant().with_interval(Interval::Never));
/// let mut delays = backoff.delays();
///
/// assert_eq!(delays.try_next(), Some(Err(DelayError::Unrepresentable { attempt: 0 })));
/// assert_eq!(delays.attempts(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayError {
    /// The base interval has no finite value.
    Unrepresentable {
        /// The 0-indexed attempt that was consumed.
        attempt: u32,
    },
}

impl DelayError {
    /// The attempt this error was produced for.
    pub fn attempt(&self) -> u32 {
        match self {
            Self::Unrepresentable { attempt } => *attempt,
        }
    }
}

impl std::fmt::Display for DelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unrepresentable { attempt } => write!(
                f,
                "retry interval has no finite value (attempt {})",
                attempt
            ),
        }
    }
}

impl std::error::Error for DelayError {}
