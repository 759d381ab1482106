//! CompatibilityResult entity
//!
//! The outcome of scoring an ordered (child, parent) pair of signs.

use serde::Serialize;

use crate::domain::value_objects::{Grade, ZodiacAnimal};

/// Relationship tag carried by every result
pub const PARENT_CHILD: &str = "parent-child";

/// Where a result's narrative text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrativeSource {
    /// Curated copy for this exact pair (or its reverse)
    Authored,
    /// Generic copy built from the grade template
    Synthesized,
}

/// Narrative bundle attached to a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Narrative {
    pub summary: String,
    pub description: String,
    pub positive_aspects: Vec<String>,
    pub challenges: Vec<String>,
    pub advice: Vec<String>,
}

/// Compatibility between a child's sign and a parent's sign
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityResult {
    pub child_animal: ZodiacAnimal,
    pub parent_animal: ZodiacAnimal,
    pub score: u8,
    pub grade: Grade,
    pub summary: String,
    pub description: String,
    pub positive_aspects: Vec<String>,
    pub challenges: Vec<String>,
    pub advice: Vec<String>,
    pub relationship_type: &'static str,
    pub narrative_source: NarrativeSource,
}

impl CompatibilityResult {
    /// Assemble a result from its scored pair and narrative
    pub fn new(
        child_animal: ZodiacAnimal,
        parent_animal: ZodiacAnimal,
        score: u8,
        narrative: Narrative,
        narrative_source: NarrativeSource,
    ) -> Self {
        Self {
            child_animal,
            parent_animal,
            score,
            grade: Grade::from_score(score),
            summary: narrative.summary,
            description: narrative.description,
            positive_aspects: narrative.positive_aspects,
            challenges: narrative.challenges,
            advice: narrative.advice,
            relationship_type: PARENT_CHILD,
            narrative_source,
        }
    }

    /// Returns true if the narrative was curated for this pair
    pub fn is_authored(&self) -> bool {
        matches!(self.narrative_source, NarrativeSource::Authored)
    }
}
