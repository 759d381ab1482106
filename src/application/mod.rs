//! Application Layer
//!
//! Use cases that orchestrate the domain services for callers.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Turns soft validation results into errors at the boundary
//!
//! ## Use Cases
//!
//! - `ReadingService` - validate years, resolve signs, score pairs and families

pub mod reading;

pub use reading::{FamilyReading, PairReading, ReadingService};
