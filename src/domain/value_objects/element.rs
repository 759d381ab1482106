//! Element value object

use serde::{Deserialize, Serialize};

use super::Locale;

/// One of the five elements associated with each sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub fn localized_name(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Element::Wood) => "Wood",
            (Locale::En, Element::Fire) => "Fire",
            (Locale::En, Element::Earth) => "Earth",
            (Locale::En, Element::Metal) => "Metal",
            (Locale::En, Element::Water) => "Water",
            (Locale::Ko, Element::Wood) => "목(木)",
            (Locale::Ko, Element::Fire) => "화(火)",
            (Locale::Ko, Element::Earth) => "토(土)",
            (Locale::Ko, Element::Metal) => "금(金)",
            (Locale::Ko, Element::Water) => "수(水)",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.localized_name(Locale::En))
    }
}
