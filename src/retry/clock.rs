//! Time source for delay sequences.

use std::time::Instant;

/// Source of the current instant.
///
/// [`DelaySequence`](super::DelaySequence) reads time only through this
/// trait, which lets tests drive deadlines without sleeping. See
/// [`ManualClock`](crate::testing::ManualClock).
pub trait Clock {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// The monotonic system clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

#[cfg(test)]
mod clock_tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_reference_forwards() {
        fn read<C: Clock>(clock: C) -> Instant {
            clock.now()
        }
        let clock = SystemClock;
        assert!(read(&clock) <= Instant::now());
    }
}
