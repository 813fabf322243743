//! Duration values used by retry strategies.

use std::time::{Duration, Instant};

/// A span of time that may be unbounded.
///
/// `Finite` wraps a regular [`Duration`]. `Never` is a sentinel that has no
/// numeric value: used as a retry interval it produces no delay, used as a
/// timeout it never expires.
///
/// # Examples
///
/// ```rust
/// use slackwater::Interval;
/// use std::time::Duration;
///
/// assert_eq!(Interval::seconds(2), Interval::Finite(Duration::from_secs(2)));
/// assert_eq!(Interval::milliseconds(500).as_duration(), Some(Duration::from_millis(500)));
/// assert_eq!(Interval::Never.as_duration(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Interval {
    /// A finite span of time.
    Finite(Duration),
    /// No finite value.
    Never,
}

impl Interval {
    /// The largest finite interval. Default timeout for every strategy.
    pub const MAX: Interval = Interval::Finite(Duration::MAX);

    /// A zero-length interval.
    pub const ZERO: Interval = Interval::Finite(Duration::ZERO);

    /// Interval of `secs` seconds.
    pub const fn seconds(secs: u64) -> Self {
        Interval::Finite(Duration::from_secs(secs))
    }

    /// Interval of `millis` milliseconds.
    pub const fn milliseconds(millis: u64) -> Self {
        Interval::Finite(Duration::from_millis(millis))
    }

    /// Interval of `micros` microseconds.
    pub const fn microseconds(micros: u64) -> Self {
        Interval::Finite(Duration::from_micros(micros))
    }

    /// Interval of `nanos` nanoseconds.
    pub const fn nanoseconds(nanos: u64) -> Self {
        Interval::Finite(Duration::from_nanos(nanos))
    }

    /// The finite duration, or `None` for [`Interval::Never`].
    pub const fn as_duration(&self) -> Option<Duration> {
        match self {
            Interval::Finite(d) => Some(*d),
            Interval::Never => None,
        }
    }

    /// Returns true for [`Interval::Never`].
    pub const fn is_never(&self) -> bool {
        matches!(self, Interval::Never)
    }

    /// Add this interval to an instant.
    ///
    /// Returns `None` when the result is not representable, which callers
    /// treat as "no deadline". `Never` is always unrepresentable.
    pub fn checked_after(&self, start: Instant) -> Option<Instant> {
        match self {
            Interval::Finite(d) => start.checked_add(*d),
            Interval::Never => None,
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval::MAX
    }
}

impl From<Duration> for Interval {
    fn from(d: Duration) -> Self {
        Interval::Finite(d)
    }
}

#[cfg(feature = "proptest")]
impl proptest::arbitrary::Arbitrary for Interval {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::{prop_oneof, Just, Strategy as _};
        prop_oneof![
            9 => (0u64..=3_600_000_000_000).prop_map(Interval::nanoseconds),
            1 => Just(Interval::Never),
        ]
        .boxed()
    }
}
