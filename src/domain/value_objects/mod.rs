//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod animal;
mod element;
mod grade;
mod locale;
mod year;

pub use animal::ZodiacAnimal;
pub use element::Element;
pub use grade::{Grade, GradeColors};
pub use locale::Locale;
pub use year::{YearIssue, YearValidation, MAX_YEAR, MIN_YEAR};
