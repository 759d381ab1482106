//! Locale value object - display language for names and year suffixes

use serde::{Deserialize, Serialize};

/// Display locale
///
/// - `Ko`: Korean names, "1996년" year format (default)
/// - `En`: English names, "year 1996" year format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ko,
    En,
}

impl Locale {
    /// Parse a locale tag such as `ko`, `ko-KR`, `en_US.UTF-8`
    pub fn from_tag(tag: &str) -> Option<Self> {
        let lang = tag
            .trim()
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "ko" | "kr" => Some(Locale::Ko),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::Ko => write!(f, "ko"),
            Locale::En => write!(f, "en"),
        }
    }
}
