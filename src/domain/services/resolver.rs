//! Zodiac resolver
//!
//! Maps a Gregorian year to its sign and metadata. The cycle is anchored so
//! that 1996 is a Rat year: `index = (year - 4) mod 12` using floor-mod.
//!
//! Resolution uses the solar calendar year only. A January birth before the
//! lunar new year resolves to the sign of the solar year.

use crate::domain::entities::ZodiacInfo;
use crate::domain::value_objects::{Locale, ZodiacAnimal, MAX_YEAR, MIN_YEAR};
use crate::error::{ZodiacError, ZodiacResult};

/// Static per-sign metadata
struct SignProfile {
    personality: &'static str,
    characteristics: [&'static str; 4],
    lucky_colors: &'static [&'static str],
    lucky_numbers: &'static [u8],
}

/// Indexed by `ZodiacAnimal::index()`
const PROFILES: [SignProfile; 12] = [
    // Rat
    SignProfile {
        personality: "Quick-witted and resourceful, reads a room before anyone else does",
        characteristics: ["clever", "adaptable", "thrifty", "sociable"],
        lucky_colors: &["blue", "gold", "green"],
        lucky_numbers: &[2, 3],
    },
    // Ox
    SignProfile {
        personality: "Patient and dependable, finishes what it starts",
        characteristics: ["diligent", "honest", "steady", "stubborn"],
        lucky_colors: &["white", "yellow", "green"],
        lucky_numbers: &[1, 4],
    },
    // Tiger
    SignProfile {
        personality: "Brave and competitive, drawn to challenges",
        characteristics: ["courageous", "confident", "passionate", "impulsive"],
        lucky_colors: &["blue", "grey", "orange"],
        lucky_numbers: &[1, 3, 4],
    },
    // Rabbit
    SignProfile {
        personality: "Gentle and perceptive, keeps the peace",
        characteristics: ["kind", "elegant", "cautious", "sensitive"],
        lucky_colors: &["red", "pink", "purple", "blue"],
        lucky_numbers: &[3, 4, 6],
    },
    // Dragon
    SignProfile {
        personality: "Energetic and ambitious, a natural leader",
        characteristics: ["charismatic", "ambitious", "generous", "proud"],
        lucky_colors: &["gold", "silver", "white"],
        lucky_numbers: &[1, 6, 7],
    },
    // Snake
    SignProfile {
        personality: "Thoughtful and intuitive, prefers depth over noise",
        characteristics: ["wise", "calm", "intuitive", "private"],
        lucky_colors: &["red", "light yellow", "black"],
        lucky_numbers: &[2, 8, 9],
    },
    // Horse
    SignProfile {
        personality: "Free-spirited and lively, happiest on the move",
        characteristics: ["energetic", "independent", "cheerful", "restless"],
        lucky_colors: &["yellow", "green"],
        lucky_numbers: &[2, 3, 7],
    },
    // Goat
    SignProfile {
        personality: "Warm and artistic, values harmony at home",
        characteristics: ["gentle", "creative", "empathetic", "indecisive"],
        lucky_colors: &["brown", "red", "purple"],
        lucky_numbers: &[2, 7],
    },
    // Monkey
    SignProfile {
        personality: "Curious and inventive, solves problems with play",
        characteristics: ["smart", "playful", "versatile", "mischievous"],
        lucky_colors: &["white", "blue", "gold"],
        lucky_numbers: &[4, 9],
    },
    // Rooster
    SignProfile {
        personality: "Observant and precise, holds high standards",
        characteristics: ["punctual", "honest", "meticulous", "outspoken"],
        lucky_colors: &["gold", "brown", "yellow"],
        lucky_numbers: &[5, 7, 8],
    },
    // Dog
    SignProfile {
        personality: "Loyal and fair-minded, protective of its people",
        characteristics: ["loyal", "sincere", "responsible", "anxious"],
        lucky_colors: &["red", "green", "purple"],
        lucky_numbers: &[3, 4, 9],
    },
    // Pig
    SignProfile {
        personality: "Easygoing and generous, enjoys life's comforts",
        characteristics: ["warm-hearted", "generous", "tolerant", "trusting"],
        lucky_colors: &["yellow", "grey", "brown", "gold"],
        lucky_numbers: &[2, 5, 8],
    },
];

/// Resolve the sign for a year in `[MIN_YEAR, MAX_YEAR]`.
pub fn get_zodiac_animal(year: i32) -> ZodiacResult<ZodiacAnimal> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ZodiacError::YearOutOfRange {
            year,
            min: MIN_YEAR,
            max: MAX_YEAR,
        });
    }

    // rem_euclid is a floor-mod: never negative
    let index = (year - 4).rem_euclid(12) as usize;
    let animal = ZodiacAnimal::from_index(index);
    tracing::trace!(year, %animal, "resolved zodiac sign");
    Ok(animal)
}

/// Resolve the sign for a year and attach its metadata.
pub fn get_zodiac_info(year: i32) -> ZodiacResult<ZodiacInfo> {
    let animal = get_zodiac_animal(year)?;
    let profile = &PROFILES[animal.index()];

    Ok(ZodiacInfo {
        animal,
        year,
        element: animal.element(),
        personality: profile.personality.to_string(),
        characteristics: profile.characteristics.iter().map(|s| s.to_string()).collect(),
        lucky_colors: profile.lucky_colors.iter().map(|s| s.to_string()).collect(),
        lucky_numbers: profile.lucky_numbers.to_vec(),
    })
}

/// Display a year with its locale-specific suffix.
pub fn format_year(year: i32, locale: Locale) -> String {
    match locale {
        Locale::Ko => format!("{}년", year),
        Locale::En => format!("year {}", year),
    }
}

/// Decorative symbol for a sign.
pub fn zodiac_emoji(animal: ZodiacAnimal) -> &'static str {
    animal.emoji()
}
