//! Reading use case
//!
//! Validates user-supplied years against the clock before resolving them,
//! so callers get `InvalidYear` for future years instead of a silent answer.

use serde::Serialize;

use crate::domain::entities::{CompatibilityResult, ZodiacInfo};
use crate::domain::ports::Clock;
use crate::domain::services::{
    calculate_compatibility, calculate_family_compatibility, get_zodiac_info, parse_year_input,
    validate_year,
};
use crate::domain::value_objects::YearValidation;
use crate::error::{ZodiacError, ZodiacResult};

/// A child and a parent with their compatibility
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairReading {
    pub child: ZodiacInfo,
    pub parent: ZodiacInfo,
    pub result: CompatibilityResult,
}

/// A child with one or two parents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyReading {
    pub child: ZodiacInfo,
    pub father: ZodiacInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother: Option<ZodiacInfo>,
    /// Father first; a mother sharing the father's sign adds no entry
    pub results: Vec<CompatibilityResult>,
}

/// Reading service
///
/// Parameterized by its clock so tests can pin the current year.
pub struct ReadingService<C: Clock> {
    clock: C,
}

impl<C: Clock> ReadingService<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Current year as seen by this service
    pub fn current_year(&self) -> i32 {
        self.clock.current_year()
    }

    /// Parse and validate free-text year input
    pub fn parse_year(&self, input: &str) -> ZodiacResult<i32> {
        let trimmed = input.trim();
        let invalid = |issue| ZodiacError::InvalidYear {
            input: trimmed.to_string(),
            issue,
        };

        let year = parse_year_input(trimmed).map_err(invalid)?;
        match validate_year(year, &self.clock) {
            YearValidation::Valid => Ok(year),
            YearValidation::Invalid(issue) => Err(invalid(issue)),
        }
    }

    /// Validate a numeric year
    pub fn check_year(&self, year: i32) -> ZodiacResult<i32> {
        match validate_year(year, &self.clock) {
            YearValidation::Valid => Ok(year),
            YearValidation::Invalid(issue) => Err(ZodiacError::InvalidYear {
                input: year.to_string(),
                issue,
            }),
        }
    }

    /// Sign and metadata for a year
    pub fn sign(&self, year: i32) -> ZodiacResult<ZodiacInfo> {
        let year = self.check_year(year)?;
        get_zodiac_info(year)
    }

    /// Compatibility of a child's year with a parent's year
    pub fn pair(&self, child_year: i32, parent_year: i32) -> ZodiacResult<PairReading> {
        let child = self.sign(child_year)?;
        let parent = self.sign(parent_year)?;
        let result = calculate_compatibility(child.animal, parent.animal);

        tracing::debug!(child_year, parent_year, score = result.score, "pair reading");
        Ok(PairReading {
            child,
            parent,
            result,
        })
    }

    /// Compatibility of a child with a father and optionally a mother
    pub fn family(
        &self,
        child_year: i32,
        father_year: i32,
        mother_year: Option<i32>,
    ) -> ZodiacResult<FamilyReading> {
        let child = self.sign(child_year)?;
        let father = self.sign(father_year)?;
        let mother = mother_year.map(|year| self.sign(year)).transpose()?;

        let results = calculate_family_compatibility(
            child.animal,
            father.animal,
            mother.as_ref().map(|m| m.animal),
        );

        tracing::debug!(results = results.len(), "family reading");
        Ok(FamilyReading {
            child,
            father,
            mother,
            results,
        })
    }
}
