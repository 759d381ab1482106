//! Property tests for year resolution.

use proptest::prelude::*;

use zodiac::{get_zodiac_animal, get_zodiac_info, ZodiacAnimal, ZodiacError, MAX_YEAR, MIN_YEAR};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Signs repeat every twelve years inside the window.
    #[test]
    fn property_cycle_repeats_every_twelve_years(year in MIN_YEAR..=(MAX_YEAR - 12)) {
        prop_assert_eq!(get_zodiac_animal(year)?, get_zodiac_animal(year + 12)?);
    }

    /// PROPERTY: Consecutive years step to the next sign.
    #[test]
    fn property_consecutive_years_are_consecutive_signs(year in MIN_YEAR..MAX_YEAR) {
        let this = get_zodiac_animal(year)?;
        let next = get_zodiac_animal(year + 1)?;
        prop_assert_eq!(ZodiacAnimal::from_index(this.index() + 1), next);
    }

    /// PROPERTY: Every year outside the window is rejected, never wrapped.
    #[test]
    fn property_out_of_range_years_are_rejected(
        year in prop_oneof![i32::MIN..MIN_YEAR, (MAX_YEAR + 1)..=i32::MAX]
    ) {
        let is_out_of_range = matches!(
            get_zodiac_animal(year),
            Err(ZodiacError::YearOutOfRange { .. })
        );
        prop_assert!(is_out_of_range);
    }

    /// PROPERTY: Info for a year carries that year and its sign.
    #[test]
    fn property_info_matches_animal(year in MIN_YEAR..=MAX_YEAR) {
        let info = get_zodiac_info(year)?;
        prop_assert_eq!(info.year, year);
        prop_assert_eq!(info.animal, get_zodiac_animal(year)?);
        prop_assert_eq!(info.element, info.animal.element());
        prop_assert!(!info.personality.is_empty());
    }
}
