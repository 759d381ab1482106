#![allow(dead_code)]

//! Common test utilities for zodiac CLI and scenario tests.
//!
//! - `TestEnv`: isolated working and config directories
//! - `TestResult`: captured output with NDJSON helpers

pub mod env;

pub use env::*;
