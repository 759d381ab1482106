//! Domain Entities
//!
//! Result objects produced by the domain services. They are plain data:
//! built fresh per call, never mutated afterwards, and serializable as-is.

mod compatibility;
mod zodiac_info;

pub use compatibility::{CompatibilityResult, Narrative, NarrativeSource, PARENT_CHILD};
pub use zodiac_info::ZodiacInfo;
