//! Clock port - source of "now" for date-dependent rules
//!
//! Only soft year validation needs the current date. Keeping it behind a
//! trait lets tests pin the year instead of depending on the wall clock.

/// Abstract source of the current calendar year
///
/// Implementations:
/// - `SystemClock` - local wall-clock time (infrastructure)
/// - `FixedClock` - a pinned year for tests and reproducible runs
pub trait Clock {
    /// Current Gregorian calendar year
    fn current_year(&self) -> i32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn current_year(&self) -> i32 {
        (**self).current_year()
    }
}

/// Clock pinned to a single year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    year: i32,
}

impl FixedClock {
    pub const fn new(year: i32) -> Self {
        Self { year }
    }
}

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.year
    }
}
