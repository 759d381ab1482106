//! Subcommand implementations for the zodiac binary
//!
//! Each command either prints a rendered view or, with `--json`, emits
//! `start`, `result` and `complete` events. Errors bubble up to `main`,
//! which turns them into an `error` event or a stderr message.

pub mod check;
pub mod family;
pub mod interactive;
pub mod matrix;
pub mod pair;
pub mod sign;
pub mod validate;
pub mod version;

use std::time::Instant;

use serde::Serialize;
use zodiac::presentation::Commands;

use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, ResultEvent, StartEvent};

/// Name used in JSON events for a parsed subcommand
pub fn command_name(command: Option<&Commands>) -> &'static str {
    match command {
        Some(Commands::Sign { .. }) => "sign",
        Some(Commands::Match { .. }) => "match",
        Some(Commands::Family { .. }) => "family",
        Some(Commands::Matrix) => "matrix",
        Some(Commands::Validate { .. }) => "validate",
        Some(Commands::Check) => "check",
        Some(Commands::Version) => "version",
        None => "interactive",
    }
}

/// An in-progress JSON event stream for one command
pub(crate) struct JsonRun {
    command: &'static str,
    started: Instant,
}

impl JsonRun {
    pub(crate) fn start(command: &'static str) -> std::io::Result<Self> {
        emit_event(&StartEvent::new(command))?;
        Ok(Self {
            command,
            started: Instant::now(),
        })
    }

    pub(crate) fn finish<T: Serialize>(self, data: &T, success: bool) -> std::io::Result<()> {
        emit_event(&ResultEvent::new(self.command, data))?;
        let elapsed = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        emit_event(&CompleteEvent::new(self.command, success).with_duration(elapsed))
    }
}
