//! Grade value object - discrete compatibility label derived from a score
//!
//! Thresholds are evaluated high-to-low:
//! - `>= 90` Best
//! - `>= 70` Good
//! - `>= 50` Average
//! - `>= 30` Caution
//! - otherwise Discord

use serde::{Deserialize, Serialize};

use super::Locale;

/// Compatibility grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Discord,
    Caution,
    Average,
    Good,
    Best,
}

/// Presentation hint for a grade (CSS-style class names)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

impl Grade {
    /// All grades from best to worst
    pub const ALL: [Grade; 5] = [
        Grade::Best,
        Grade::Good,
        Grade::Average,
        Grade::Caution,
        Grade::Discord,
    ];

    /// Minimum score (inclusive) for each grade, evaluated in `ALL` order
    const THRESHOLDS: [(u8, Grade); 4] = [
        (90, Grade::Best),
        (70, Grade::Good),
        (50, Grade::Average),
        (30, Grade::Caution),
    ];

    /// Derive the grade for a score
    pub fn from_score(score: u8) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::Discord)
    }

    /// Label for display
    pub fn label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Grade::Best) => "Best",
            (Locale::En, Grade::Good) => "Good",
            (Locale::En, Grade::Average) => "Average",
            (Locale::En, Grade::Caution) => "Caution",
            (Locale::En, Grade::Discord) => "Discord",
            (Locale::Ko, Grade::Best) => "최고",
            (Locale::Ko, Grade::Good) => "좋음",
            (Locale::Ko, Grade::Average) => "보통",
            (Locale::Ko, Grade::Caution) => "주의",
            (Locale::Ko, Grade::Discord) => "상극",
        }
    }

    /// One-sentence elaboration shown under the score
    pub fn description(&self) -> &'static str {
        match self {
            Grade::Best => "A natural match: the two signs support and complete each other.",
            Grade::Good => "A warm, steady bond with plenty of common ground.",
            Grade::Average => "An ordinary pairing that grows with mutual effort.",
            Grade::Caution => "Friction shows up easily; patience and clear words help.",
            Grade::Discord => "Opposing temperaments; the bond needs deliberate care.",
        }
    }

    /// Presentation hint colors
    pub fn colors(&self) -> GradeColors {
        match self {
            Grade::Best => GradeColors {
                bg: "bg-emerald-50",
                text: "text-emerald-700",
                border: "border-emerald-200",
            },
            Grade::Good => GradeColors {
                bg: "bg-sky-50",
                text: "text-sky-700",
                border: "border-sky-200",
            },
            Grade::Average => GradeColors {
                bg: "bg-gray-50",
                text: "text-gray-700",
                border: "border-gray-200",
            },
            Grade::Caution => GradeColors {
                bg: "bg-amber-50",
                text: "text-amber-700",
                border: "border-amber-200",
            },
            Grade::Discord => GradeColors {
                bg: "bg-rose-50",
                text: "text-rose-700",
                border: "border-rose-200",
            },
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label(Locale::En))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_inclusive_lower_bounds() {
        assert_eq!(Grade::from_score(100), Grade::Best);
        assert_eq!(Grade::from_score(90), Grade::Best);
        assert_eq!(Grade::from_score(89), Grade::Good);
        assert_eq!(Grade::from_score(70), Grade::Good);
        assert_eq!(Grade::from_score(69), Grade::Average);
        assert_eq!(Grade::from_score(50), Grade::Average);
        assert_eq!(Grade::from_score(49), Grade::Caution);
        assert_eq!(Grade::from_score(30), Grade::Caution);
        assert_eq!(Grade::from_score(29), Grade::Discord);
        assert_eq!(Grade::from_score(0), Grade::Discord);
    }

    #[test]
    fn from_score_is_monotonic() {
        let mut previous = Grade::from_score(0);
        for score in 1..=100u8 {
            let grade = Grade::from_score(score);
            assert!(grade >= previous, "grade dropped at score {score}");
            previous = grade;
        }
    }

    #[test]
    fn every_grade_has_distinct_colors() {
        let mut seen = std::collections::HashSet::new();
        for grade in Grade::ALL {
            assert!(seen.insert(grade.colors().bg));
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Grade::Caution.label(Locale::En), "Caution");
        assert_eq!(Grade::Best.label(Locale::Ko), "최고");
        assert_eq!(Grade::Discord.to_string(), "Discord");
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&Grade::Average).unwrap();
        assert_eq!(json, "\"average\"");
    }
}
