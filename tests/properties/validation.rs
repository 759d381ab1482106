//! Property tests for free-text year validation.

use proptest::prelude::*;

use zodiac::{validate_year, validate_year_input, FixedClock, YearIssue, YearValidation};

const CLOCK: FixedClock = FixedClock::new(2025);

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Arbitrary input never panics.
    #[test]
    fn property_any_input_validates_without_panic(input in ".{0,24}") {
        let _ = validate_year_input(&input, &CLOCK);
    }

    /// PROPERTY: Surrounding whitespace does not change the outcome.
    #[test]
    fn property_whitespace_is_ignored(year in 1800i32..2200, pad in "[ \t]{0,3}") {
        let padded = format!("{pad}{year}{pad}");
        prop_assert_eq!(
            validate_year_input(&padded, &CLOCK),
            validate_year(year, &CLOCK)
        );
    }

    /// PROPERTY: Years from the window start through the clock year are valid.
    #[test]
    fn property_past_years_in_window_are_valid(year in 1900i32..=2025) {
        prop_assert_eq!(validate_year(year, &CLOCK), YearValidation::Valid);
    }

    /// PROPERTY: Letters make the input not a number.
    #[test]
    fn property_letters_are_not_a_number(prefix in "[0-9]{0,3}", letters in "[a-zA-Z]{1,4}") {
        let input = format!("{prefix}{letters}");
        prop_assert_eq!(
            validate_year_input(&input, &CLOCK),
            YearValidation::Invalid(YearIssue::NotANumber)
        );
    }
}
