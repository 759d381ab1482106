//! JSON output for `--json` runs.
//!
//! stdout carries one JSON object per line and nothing else; logs and
//! warnings stay on stderr.

pub mod events;

use std::io::{self, Write};

use serde::Serialize;

/// Serialize `event` as a single line and flush, so consumers see it immediately.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event).map_err(io::Error::from)?;
    writeln!(out)?;
    out.flush()
}

pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    write_typed_event(&mut io::stdout().lock(), event)
}

#[cfg(test)]
mod tests {
    use super::events::{CompleteEvent, ResultEvent, StartEvent};
    use super::*;

    #[test]
    fn one_object_per_line() {
        let mut buffer = Vec::new();
        write_typed_event(&mut buffer, &StartEvent::new("sign")).unwrap();
        write_typed_event(&mut buffer, &ResultEvent::new("sign", "rat")).unwrap();
        write_typed_event(&mut buffer, &CompleteEvent::new("sign", true)).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with('\n'));

        let events: Vec<serde_json::Value> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        let kinds: Vec<&str> = events.iter().map(|e| e["event"].as_str().unwrap()).collect();
        assert_eq!(kinds, ["start", "result", "complete"]);
    }
}
