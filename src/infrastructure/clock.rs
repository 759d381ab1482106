//! System clock adapter

use chrono::{Datelike, Local};

use crate::domain::ports::Clock;

/// Clock reading the local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_within_supported_window() {
        let year = SystemClock.current_year();
        assert!(year >= 2024, "system clock reports {year}");
    }
}
