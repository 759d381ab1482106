//! Scenario tests for zodiac.
//!
//! Each scenario walks through one user journey with the real binary.
//!
//! Run with: cargo test --test scenarios

mod common;

#[path = "scenarios/parent_child_reading.rs"]
mod parent_child_reading;

#[path = "scenarios/family_setup.rs"]
mod family_setup;
