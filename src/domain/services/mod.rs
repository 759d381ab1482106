//! Domain Services
//!
//! Pure functions over the static sign and compatibility tables.
//! Nothing here performs I/O; the only time dependency is the `Clock` port.

pub mod audit;
pub mod compatibility;
pub mod matrix;
pub mod narrative;
mod resolver;
mod validation;

pub use audit::{audit_tables, AuditReport, Finding, Severity, TierCount};
pub use compatibility::{
    calculate_compatibility, calculate_family_compatibility, compatibility_color,
    format_compatibility_score, grade_description,
};
pub use narrative::NarrativeLookup;
pub use resolver::{format_year, get_zodiac_animal, get_zodiac_info, zodiac_emoji};
pub use validation::{parse_year_input, validate_year, validate_year_input};
