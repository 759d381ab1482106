//! Compatibility engine
//!
//! Scores an ordered (child, parent) pair from the matrix, derives the
//! grade, and attaches narrative copy. Every function here is total.

use crate::domain::entities::CompatibilityResult;
use crate::domain::services::{matrix, narrative};
use crate::domain::value_objects::{Grade, GradeColors, ZodiacAnimal};

/// Score, grade and narrate a child/parent pair.
pub fn calculate_compatibility(child: ZodiacAnimal, parent: ZodiacAnimal) -> CompatibilityResult {
    let score = matrix::score(child, parent);
    let grade = Grade::from_score(score);
    let (narrative, source) = narrative::resolve(child, parent, grade);

    tracing::debug!(%child, %parent, score, %grade, ?source, "calculated compatibility");
    CompatibilityResult::new(child, parent, score, narrative, source)
}

/// Compatibility of a child with each parent.
///
/// The father's result is always first. A mother sharing the father's sign
/// adds nothing new and is skipped.
pub fn calculate_family_compatibility(
    child: ZodiacAnimal,
    father: ZodiacAnimal,
    mother: Option<ZodiacAnimal>,
) -> Vec<CompatibilityResult> {
    let mut results = vec![calculate_compatibility(child, father)];

    match mother {
        Some(mother) if mother != father => {
            results.push(calculate_compatibility(child, mother));
        }
        Some(_) => tracing::debug!("mother shares father's sign, skipping duplicate"),
        None => {}
    }

    results
}

/// Presentation colors for a grade
pub fn compatibility_color(grade: Grade) -> GradeColors {
    grade.colors()
}

/// Render a score as a percentage
pub fn format_compatibility_score(score: u8) -> String {
    format!("{}%", score)
}

/// One-sentence description for a grade
pub fn grade_description(grade: Grade) -> &'static str {
    grade.description()
}
