//! Output Formatting
//!
//! Locale-aware text fragments shared by the terminal views. Nothing here
//! prints; callers decide where the strings go.

use crate::domain::entities::{CompatibilityResult, ZodiacInfo};
use crate::domain::services::{format_compatibility_score, format_year, matrix};
use crate::domain::value_objects::{Locale, ZodiacAnimal};

/// Sign name as used in a sentence: "말띠" or "Horse"
pub fn sign_label(animal: ZodiacAnimal, locale: Locale) -> String {
    match locale {
        Locale::Ko => format!("{}띠", animal.name_ko()),
        Locale::En => animal.name_en().to_string(),
    }
}

/// One-line summary of a resolved year
pub fn sign_headline(info: &ZodiacInfo, locale: Locale) -> String {
    format!(
        "{} {} ({}, {})",
        info.emoji(),
        sign_label(info.animal, locale),
        format_year(info.year, locale),
        info.element.localized_name(locale),
    )
}

/// Score with its grade label: "30% 주의"
pub fn score_badge(result: &CompatibilityResult, locale: Locale) -> String {
    format!(
        "{} {}",
        format_compatibility_score(result.score),
        result.grade.label(locale)
    )
}

/// "🐴 Horse → 🐮 Ox" style pair line, child first
pub fn pair_line(result: &CompatibilityResult, locale: Locale, arrow: &str) -> String {
    format!(
        "{} {} {} {} {}",
        result.child_animal.emoji(),
        sign_label(result.child_animal, locale),
        arrow,
        result.parent_animal.emoji(),
        sign_label(result.parent_animal, locale),
    )
}

/// The score matrix as display strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixTable {
    pub header: Vec<String>,
    pub rows: Vec<(String, Vec<String>)>,
}

impl MatrixTable {
    pub fn build(locale: Locale) -> Self {
        let header = ZodiacAnimal::ALL
            .iter()
            .map(|a| a.localized_name(locale).to_string())
            .collect();
        let rows = ZodiacAnimal::ALL
            .iter()
            .map(|&child| {
                let cells = matrix::row(child).iter().map(|s| s.to_string()).collect();
                (child.localized_name(locale).to_string(), cells)
            })
            .collect();
        Self { header, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::{calculate_compatibility, get_zodiac_info};

    #[test]
    fn sign_label_per_locale() {
        assert_eq!(sign_label(ZodiacAnimal::Horse, Locale::Ko), "말띠");
        assert_eq!(sign_label(ZodiacAnimal::Horse, Locale::En), "Horse");
    }

    #[test]
    fn headline_includes_year_and_element() {
        let info = get_zodiac_info(1996).unwrap();
        let line = sign_headline(&info, Locale::En);
        assert!(line.starts_with("🐭 Rat"));
        assert!(line.contains("year 1996"));
        assert!(line.contains("Water"));
    }

    #[test]
    fn score_badge_uses_locale_label() {
        let result = calculate_compatibility(ZodiacAnimal::Horse, ZodiacAnimal::Ox);
        assert_eq!(score_badge(&result, Locale::Ko), "30% 주의");
        assert_eq!(score_badge(&result, Locale::En), "30% Caution");
    }

    #[test]
    fn pair_line_is_child_first() {
        let result = calculate_compatibility(ZodiacAnimal::Rat, ZodiacAnimal::Ox);
        assert_eq!(pair_line(&result, Locale::En, "->"), "🐭 Rat -> 🐮 Ox");
    }

    #[test]
    fn matrix_table_is_square() {
        let table = MatrixTable::build(Locale::En);
        assert_eq!(table.header.len(), 12);
        assert_eq!(table.rows.len(), 12);
        assert!(table.rows.iter().all(|(_, cells)| cells.len() == 12));
        assert_eq!(table.rows[0].0, "Rat");
        assert_eq!(table.rows[0].1[1], "90");
    }
}
