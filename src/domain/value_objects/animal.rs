//! ZodiacAnimal value object - the twelve signs in cycle order

use serde::{Deserialize, Serialize};

use super::{Element, Locale};

/// One of the twelve zodiac signs.
///
/// The declaration order is the cycle order; `index()` is the ordinal used
/// for every table in the crate (metadata, matrix rows and columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl ZodiacAnimal {
    /// All signs in cycle order, starting from the Rat
    pub const ALL: [ZodiacAnimal; 12] = [
        ZodiacAnimal::Rat,
        ZodiacAnimal::Ox,
        ZodiacAnimal::Tiger,
        ZodiacAnimal::Rabbit,
        ZodiacAnimal::Dragon,
        ZodiacAnimal::Snake,
        ZodiacAnimal::Horse,
        ZodiacAnimal::Goat,
        ZodiacAnimal::Monkey,
        ZodiacAnimal::Rooster,
        ZodiacAnimal::Dog,
        ZodiacAnimal::Pig,
    ];

    /// Ordinal position in the cycle (Rat = 0, Pig = 11)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Sign at the given cycle position, wrapping modulo 12
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// English display name
    pub fn name_en(&self) -> &'static str {
        match self {
            ZodiacAnimal::Rat => "Rat",
            ZodiacAnimal::Ox => "Ox",
            ZodiacAnimal::Tiger => "Tiger",
            ZodiacAnimal::Rabbit => "Rabbit",
            ZodiacAnimal::Dragon => "Dragon",
            ZodiacAnimal::Snake => "Snake",
            ZodiacAnimal::Horse => "Horse",
            ZodiacAnimal::Goat => "Goat",
            ZodiacAnimal::Monkey => "Monkey",
            ZodiacAnimal::Rooster => "Rooster",
            ZodiacAnimal::Dog => "Dog",
            ZodiacAnimal::Pig => "Pig",
        }
    }

    /// Korean display name
    pub fn name_ko(&self) -> &'static str {
        match self {
            ZodiacAnimal::Rat => "쥐",
            ZodiacAnimal::Ox => "소",
            ZodiacAnimal::Tiger => "호랑이",
            ZodiacAnimal::Rabbit => "토끼",
            ZodiacAnimal::Dragon => "용",
            ZodiacAnimal::Snake => "뱀",
            ZodiacAnimal::Horse => "말",
            ZodiacAnimal::Goat => "양",
            ZodiacAnimal::Monkey => "원숭이",
            ZodiacAnimal::Rooster => "닭",
            ZodiacAnimal::Dog => "개",
            ZodiacAnimal::Pig => "돼지",
        }
    }

    /// Display name for the given locale
    pub fn localized_name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ko => self.name_ko(),
            Locale::En => self.name_en(),
        }
    }

    /// Decorative symbol for the sign
    pub fn emoji(&self) -> &'static str {
        match self {
            ZodiacAnimal::Rat => "🐭",
            ZodiacAnimal::Ox => "🐮",
            ZodiacAnimal::Tiger => "🐯",
            ZodiacAnimal::Rabbit => "🐰",
            ZodiacAnimal::Dragon => "🐲",
            ZodiacAnimal::Snake => "🐍",
            ZodiacAnimal::Horse => "🐴",
            ZodiacAnimal::Goat => "🐑",
            ZodiacAnimal::Monkey => "🐵",
            ZodiacAnimal::Rooster => "🐔",
            ZodiacAnimal::Dog => "🐶",
            ZodiacAnimal::Pig => "🐷",
        }
    }

    /// Fixed element of the sign
    pub fn element(&self) -> Element {
        match self {
            ZodiacAnimal::Rat | ZodiacAnimal::Pig => Element::Water,
            ZodiacAnimal::Tiger | ZodiacAnimal::Rabbit => Element::Wood,
            ZodiacAnimal::Snake | ZodiacAnimal::Horse => Element::Fire,
            ZodiacAnimal::Monkey | ZodiacAnimal::Rooster => Element::Metal,
            ZodiacAnimal::Ox | ZodiacAnimal::Dragon | ZodiacAnimal::Goat | ZodiacAnimal::Dog => {
                Element::Earth
            }
        }
    }
}

impl std::fmt::Display for ZodiacAnimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name_en())
    }
}
