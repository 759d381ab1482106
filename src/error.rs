//! Error types for the zodiac crate
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::YearIssue;

/// Result type alias for zodiac operations
pub type ZodiacResult<T> = Result<T, ZodiacError>;

/// Main error type for zodiac operations
#[derive(Error, Debug)]
pub enum ZodiacError {
    /// Year outside the supported resolution window
    #[error("year {year} is out of range ({min}-{max})")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    /// Year rejected by soft validation (not a number, future year, ...)
    #[error("invalid year '{input}': {issue}")]
    InvalidYear { input: String, issue: YearIssue },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ZodiacError {
    /// Stable short code used in JSON error events
    pub fn code(&self) -> &'static str {
        match self {
            ZodiacError::YearOutOfRange { .. } => "year_out_of_range",
            ZodiacError::InvalidYear { .. } => "invalid_year",
            ZodiacError::InvalidConfig { .. } => "invalid_config",
            ZodiacError::Io(_) => "io",
        }
    }
}
