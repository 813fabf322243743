//! Backoff strategy configuration.

use std::time::Duration;

use super::interval::Interval;

/// Default retry limit for [`Strategy::Constant`].
pub const DEFAULT_CONSTANT_RETRIES: u32 = 5;
/// Default retry limit for [`Strategy::Exponential`].
pub const DEFAULT_EXPONENTIAL_RETRIES: u32 = 3;
/// Default growth factor for [`Strategy::Exponential`].
pub const DEFAULT_MULTIPLIER: f64 = 2.0;
/// Default base interval for both strategies.
pub const DEFAULT_INTERVAL: Interval = Interval::seconds(2);

/// The shape of the delays between retries.
///
/// Strategies are pure data: they describe how long to wait, never wait
/// themselves. Nothing is validated at construction; a zero retry limit, a
/// zero interval or a negative multiplier are all accepted and simply produce
/// degenerate sequences.
///
/// # Examples
///
/// ```rust
/// use slackwater::{Interval, Strategy};
///
/// let strategy = Strategy::exponential()
///     .with_retry_limit(4)
///     .with_interval(Interval::milliseconds(100));
///
/// assert_eq!(strategy.maximum_retries(), 4);
/// assert_eq!(strategy.base_duration(), Interval::milliseconds(100));
/// assert_eq!(strategy.timeout(), Interval::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Every delay equals `interval`.
    Constant {
        /// Maximum number of delays produced.
        #[cfg_attr(feature = "serde", serde(default = "default_constant_retries"))]
        retry_limit: u32,
        /// Delay between attempts.
        #[cfg_attr(feature = "serde", serde(default = "default_interval"))]
        interval: Interval,
        /// Overall time budget, measured from sequence creation.
        #[cfg_attr(feature = "serde", serde(default))]
        timeout: Interval,
    },
    /// Delay for attempt `n` (0-indexed) is `interval * multiplier^n`.
    Exponential {
        /// Maximum number of delays produced.
        #[cfg_attr(feature = "serde", serde(default = "default_exponential_retries"))]
        retry_limit: u32,
        /// Growth factor applied per attempt.
        #[cfg_attr(feature = "serde", serde(default = "default_multiplier"))]
        multiplier: f64,
        /// Delay before the first retry.
        #[cfg_attr(feature = "serde", serde(default = "default_interval"))]
        interval: Interval,
        /// Overall time budget, measured from sequence creation.
        #[cfg_attr(feature = "serde", serde(default))]
        timeout: Interval,
    },
}

#[cfg(feature = "serde")]
fn default_constant_retries() -> u32 {
    DEFAULT_CONSTANT_RETRIES
}

#[cfg(feature = "serde")]
fn default_exponential_retries() -> u32 {
    DEFAULT_EXPONENTIAL_RETRIES
}

#[cfg(feature = "serde")]
fn default_multiplier() -> f64 {
    DEFAULT_MULTIPLIER
}

#[cfg(feature = "serde")]
fn default_interval() -> Interval {
    DEFAULT_INTERVAL
}

impl Strategy {
    /// Constant strategy with default parameters: 5 retries, 2s apart, no timeout.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slackwater::{Interval, Strategy};
    ///
    /// let strategy = Strategy::constant();
    /// assert_eq!(strategy.maximum_retries(), 5);
    /// assert_eq!(strategy.base_duration(), Interval::seconds(2));
    /// ```
    pub const fn constant() -> Self {
        Strategy::Constant {
            retry_limit: DEFAULT_CONSTANT_RETRIES,
            interval: DEFAULT_INTERVAL,
            timeout: Interval::MAX,
        }
    }

    /// Exponential strategy with default parameters: 3 retries starting at
    /// 2s, doubling each time, no timeout.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slackwater::Strategy;
    /// use std::time::Duration;
    ///
    /// let strategy = Strategy::exponential();
    /// assert_eq!(strategy.delay_for_attempt(0), Some(Duration::from_secs(2)));
    /// assert_eq!(strategy.delay_for_attempt(1), Some(Duration::from_secs(4)));
    /// assert_eq!(strategy.delay_for_attempt(2), Some(Duration::from_secs(8)));
    /// ```
    pub const fn exponential() -> Self {
        Strategy::Exponential {
            retry_limit: DEFAULT_EXPONENTIAL_RETRIES,
            multiplier: DEFAULT_MULTIPLIER,
            interval: DEFAULT_INTERVAL,
            timeout: Interval::MAX,
        }
    }

    /// Set the retry limit. Zero means "never retry".
    pub fn with_retry_limit(mut self, n: u32) -> Self {
        match &mut self {
            Strategy::Constant { retry_limit, .. } | Strategy::Exponential { retry_limit, .. } => {
                *retry_limit = n
            }
        }
        self
    }

    /// Set the base interval.
    pub fn with_interval(mut self, value: impl Into<Interval>) -> Self {
        let value = value.into();
        match &mut self {
            Strategy::Constant { interval, .. } | Strategy::Exponential { interval, .. } => {
                *interval = value
            }
        }
        self
    }

    /// Set the overall time budget.
    pub fn with_timeout(mut self, value: impl Into<Interval>) -> Self {
        let value = value.into();
        match &mut self {
            Strategy::Constant { timeout, .. } | Strategy::Exponential { timeout, .. } => {
                *timeout = value
            }
        }
        self
    }

    /// Set the growth factor. Has no effect on a constant strategy.
    pub fn with_multiplier(mut self, value: f64) -> Self {
        if let Strategy::Exponential { multiplier, .. } = &mut self {
            *multiplier = value;
        }
        self
    }

    /// Maximum number of delays a sequence built from this strategy yields.
    pub const fn maximum_retries(&self) -> u32 {
        match self {
            Strategy::Constant { retry_limit, .. } | Strategy::Exponential { retry_limit, .. } => {
                *retry_limit
            }
        }
    }

    /// The configured base interval.
    pub const fn base_duration(&self) -> Interval {
        match self {
            Strategy::Constant { interval, .. } | Strategy::Exponential { interval, .. } => {
                *interval
            }
        }
    }

    /// The configured overall time budget.
    pub const fn timeout(&self) -> Interval {
        match self {
            Strategy::Constant { timeout, .. } | Strategy::Exponential { timeout, .. } => *timeout,
        }
    }

    /// Compute the delay before attempt N (0-indexed).
    ///
    /// This is the bare formula: retry limits and deadlines are enforced by
    /// [`DelaySequence`](super::DelaySequence), not here. Returns `None` only
    /// when the base interval is [`Interval::Never`].
    ///
    /// Exponential results are clamped to `[0, Duration::MAX]`, so negative
    /// or NaN products give a zero delay and overflow saturates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slackwater::{Interval, Strategy};
    /// use std::time::Duration;
    ///
    /// let strategy = Strategy::exponential()
    ///     .with_interval(Interval::milliseconds(100))
    ///     .with_multiplier(3.0);
    ///
    /// assert_eq!(strategy.delay_for_attempt(0), Some(Duration::from_millis(100)));
    /// assert_eq!(strategy.delay_for_attempt(2), Some(Duration::from_millis(900)));
    ///
    /// let never = Strategy::constant().with_interval(Interval::Never);
    /// assert_eq!(never.delay_for_attempt(0), None);
    /// ```
    pub fn delay_for_attempt(&self, attempt: u32) -> Option<Duration> {
        match self {
            Strategy::Constant { interval, .. } => interval.as_duration(),
            Strategy::Exponential {
                multiplier,
                interval,
                ..
            } => {
                let base = interval.as_duration()?;
                let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
                Some(scale(base, multiplier.powi(exponent)))
            }
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::exponential()
    }
}

/// Multiply a duration by a float, clamped to the representable range.
fn scale(base: Duration, factor: f64) -> Duration {
    let nanos = base.as_nanos() as f64 * factor;
    if nanos.is_nan() || nanos <= 0.0 {
        return Duration::ZERO;
    }
    if nanos < u64::MAX as f64 {
        return Duration::from_nanos(nanos as u64);
    }
    Duration::try_from_secs_f64(nanos / 1e9).unwrap_or(Duration::MAX)
}

#[cfg(feature = "proptest")]
impl proptest::arbitrary::Arbitrary for Strategy {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::{any, prop_oneof, Strategy as _};
        prop_oneof![
            (0u32..16, any::<Interval>(), any::<Interval>()).prop_map(
                |(retry_limit, interval, timeout)| Self::Constant {
                    retry_limit,
                    interval,
                    timeout,
                }
            ),
            (0u32..16, 0.0f64..8.0, any::<Interval>(), any::<Interval>()).prop_map(
                |(retry_limit, multiplier, interval, timeout)| Self::Exponential {
                    retry_limit,
                    multiplier,
                    interval,
                    timeout,
                }
            ),
        ]
        .boxed()
    }
}
