//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Locale-aware text formatting of domain results
//!
//! ## Structure
//!
//! - `cli` - clap definitions shared by the binary and its tests
//! - `output` - plain-text fragments (headlines, score badges, matrix cells)

pub mod cli;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands};
