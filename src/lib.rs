//! Zodiac - Chinese zodiac signs and parent-child compatibility
//!
//! Resolves a Gregorian birth year to one of the twelve signs and scores how
//! a child's sign gets along with a parent's sign, using a fixed 12x12
//! matrix and curated narrative copy.
//!
//! ```
//! use zodiac::{calculate_compatibility, get_zodiac_animal, Grade, ZodiacAnimal};
//!
//! let child = get_zodiac_animal(1990).unwrap();
//! let parent = get_zodiac_animal(1985).unwrap();
//! assert_eq!((child, parent), (ZodiacAnimal::Horse, ZodiacAnimal::Ox));
//!
//! let result = calculate_compatibility(child, parent);
//! assert_eq!(result.score, 30);
//! assert_eq!(result.grade, Grade::Caution);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{FamilyReading, PairReading, ReadingService};
pub use config::Config;
pub use domain::entities::{CompatibilityResult, NarrativeSource, ZodiacInfo};
pub use domain::ports::{Clock, FixedClock};
pub use domain::services::{
    audit_tables, calculate_compatibility, calculate_family_compatibility, compatibility_color,
    format_compatibility_score, format_year, get_zodiac_animal, get_zodiac_info,
    grade_description, parse_year_input, validate_year, validate_year_input, zodiac_emoji,
    AuditReport,
};
pub use domain::value_objects::{
    Element, Grade, GradeColors, Locale, YearIssue, YearValidation, ZodiacAnimal, MAX_YEAR,
    MIN_YEAR,
};
pub use error::{ZodiacError, ZodiacResult};
pub use infrastructure::SystemClock;
