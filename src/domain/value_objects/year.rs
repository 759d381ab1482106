//! Year bounds and soft-validation outcome

use serde::{Serialize, Serializer};

/// First year the resolver accepts
pub const MIN_YEAR: i32 = 1900;
/// Last year the resolver accepts
pub const MAX_YEAR: i32 = 2100;

/// Why a year was rejected by soft validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearIssue {
    /// Input is not an integer
    NotANumber,
    /// Before `MIN_YEAR`
    TooEarly,
    /// After `MAX_YEAR`
    TooLate,
    /// After the current calendar year
    InFuture,
}

impl YearIssue {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            YearIssue::NotANumber => "not_a_number",
            YearIssue::TooEarly => "too_early",
            YearIssue::TooLate => "too_late",
            YearIssue::InFuture => "in_future",
        }
    }

    /// Inline message for form-style display
    pub fn message(&self) -> String {
        match self {
            YearIssue::NotANumber => "not a number".to_string(),
            YearIssue::TooEarly => format!("year must be {} or later", MIN_YEAR),
            YearIssue::TooLate => format!("year must be {} or earlier", MAX_YEAR),
            YearIssue::InFuture => "future year not allowed".to_string(),
        }
    }
}

impl std::fmt::Display for YearIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// Outcome of `validate_year`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearValidation {
    Valid,
    Invalid(YearIssue),
}

impl YearValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, YearValidation::Valid)
    }

    pub fn issue(&self) -> Option<YearIssue> {
        match self {
            YearValidation::Valid => None,
            YearValidation::Invalid(issue) => Some(*issue),
        }
    }

    /// Error message, if invalid
    pub fn error(&self) -> Option<String> {
        self.issue().map(|issue| issue.message())
    }
}

// Wire shape: { "is_valid": bool, "error": string?, "code": string? }
impl Serialize for YearValidation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Wire {
            is_valid: bool,
            #[serde(skip_serializing_if = "Option::is_none")]
            error: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            code: Option<&'static str>,
        }

        Wire {
            is_valid: self.is_valid(),
            error: self.error(),
            code: self.issue().map(|i| i.code()),
        }
        .serialize(serializer)
    }
}
