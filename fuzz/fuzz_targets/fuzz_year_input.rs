#![no_main]

use libfuzzer_sys::fuzz_target;
use zodiac::{
    calculate_compatibility, get_zodiac_animal, validate_year_input, FixedClock, YearValidation,
};

const CLOCK: FixedClock = FixedClock::new(2025);

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // A year that validates must also resolve and score against itself
    if validate_year_input(input, &CLOCK) == YearValidation::Valid {
        let year: i32 = input.trim().parse().expect("valid input parses");
        let animal = get_zodiac_animal(year).expect("valid year resolves");
        let _ = calculate_compatibility(animal, animal);
    }
});
