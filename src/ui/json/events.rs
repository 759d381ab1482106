//! NDJSON events for `--json`.
//!
//! A successful run is `start`, one `result`, then `complete`. A failed run
//! is `start` (when the command got that far) followed by `error`. The
//! `event` field comes from each struct's serde tag.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename = "start")]
pub struct StartEvent<'a> {
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Carries the command's payload under `data`
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename = "result")]
pub struct ResultEvent<'a, T: Serialize> {
    pub command: &'a str,
    pub data: T,
}

impl<'a, T: Serialize> ResultEvent<'a, T> {
    pub fn new(command: &'a str, data: T) -> Self {
        Self { command, data }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename = "complete")]
pub struct CompleteEvent<'a> {
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl<'a> CompleteEvent<'a> {
    pub fn new(command: &'a str, success: bool) -> Self {
        Self {
            command,
            success,
            duration_ms: None,
        }
    }

    pub fn with_duration(self, duration_ms: u64) -> Self {
        Self {
            duration_ms: Some(duration_ms),
            ..self
        }
    }
}

/// `code` is a stable snake_case identifier such as `invalid_year`
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename = "error")]
pub struct ErrorEvent<'a> {
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            command,
            code,
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(self, help: impl Into<String>) -> Self {
        Self {
            help: Some(help.into()),
            ..self
        }
    }
}
