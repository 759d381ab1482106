//! Property tests for zodiac.
//!
//! Randomized inputs protect invariants like "never panics", "cycles every
//! twelve years", and "scores stay on the tier ladder".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/resolver.rs"]
mod resolver;

#[path = "properties/compatibility.rs"]
mod compatibility;

#[path = "properties/validation.rs"]
mod validation;
