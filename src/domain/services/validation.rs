//! Soft year validation for form-style input
//!
//! Unlike the resolver, nothing here returns an error: callers get a
//! `YearValidation` they can show inline.

use crate::domain::ports::Clock;
use crate::domain::value_objects::{YearIssue, YearValidation, MAX_YEAR, MIN_YEAR};

/// Parse free-text input into a year.
///
/// Surrounding whitespace is ignored. Anything that is not an optionally
/// signed base-10 integer fitting in `i32` is `NotANumber`.
pub fn parse_year_input(input: &str) -> Result<i32, YearIssue> {
    input.trim().parse::<i32>().map_err(|_| YearIssue::NotANumber)
}

/// Validate a numeric year against the supported range and the current year.
///
/// Rules, in order: before `MIN_YEAR`, after `MAX_YEAR`, after the current
/// year. The first failing rule wins.
pub fn validate_year(year: i32, clock: &impl Clock) -> YearValidation {
    let issue = if year < MIN_YEAR {
        Some(YearIssue::TooEarly)
    } else if year > MAX_YEAR {
        Some(YearIssue::TooLate)
    } else if year > clock.current_year() {
        Some(YearIssue::InFuture)
    } else {
        None
    };

    match issue {
        Some(issue) => YearValidation::Invalid(issue),
        None => YearValidation::Valid,
    }
}

/// Validate free-text input: the not-a-number rule runs before the numeric rules.
pub fn validate_year_input(input: &str, clock: &impl Clock) -> YearValidation {
    match parse_year_input(input) {
        Ok(year) => validate_year(year, clock),
        Err(issue) => YearValidation::Invalid(issue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FixedClock;

    const NOW: FixedClock = FixedClock::new(2025);

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(parse_year_input(" 1996\n"), Ok(1996));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert_eq!(parse_year_input(""), Err(YearIssue::NotANumber));
        assert_eq!(parse_year_input("19x6"), Err(YearIssue::NotANumber));
        assert_eq!(parse_year_input("1996.5"), Err(YearIssue::NotANumber));
        assert_eq!(parse_year_input("99999999999"), Err(YearIssue::NotANumber));
    }

    #[test]
    fn rules_apply_in_order() {
        assert_eq!(
            validate_year(1899, &NOW),
            YearValidation::Invalid(YearIssue::TooEarly)
        );
        assert_eq!(
            validate_year(2101, &NOW),
            YearValidation::Invalid(YearIssue::TooLate)
        );
        assert_eq!(
            validate_year(2026, &NOW),
            YearValidation::Invalid(YearIssue::InFuture)
        );
        assert_eq!(validate_year(2025, &NOW), YearValidation::Valid);
        assert_eq!(validate_year(1900, &NOW), YearValidation::Valid);
    }

    #[test]
    fn too_late_wins_over_future() {
        let far_future = FixedClock::new(2200);
        assert_eq!(
            validate_year(2150, &far_future),
            YearValidation::Invalid(YearIssue::TooLate)
        );
    }

    #[test]
    fn input_not_a_number_first() {
        assert_eq!(
            validate_year_input("abc", &NOW),
            YearValidation::Invalid(YearIssue::NotANumber)
        );
        assert_eq!(validate_year_input("1985", &NOW), YearValidation::Valid);
    }
}
