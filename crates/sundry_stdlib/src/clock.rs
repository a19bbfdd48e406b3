//! Injectable time sources.

use sundry_foundation::Date;

/// Source of the current instant.
pub trait Clock {
    /// Returns the current wall-clock instant.
    fn now(&self) -> Date;
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Date {
        Date::from_naive(chrono::Local::now().naive_local())
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn now(&self) -> Date {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Date {
        (**self).now()
    }
}
