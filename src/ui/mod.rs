//! Terminal UI for the zodiac binary
//!
//! - `theme` - colors, icons and borders
//! - `terminal` / `context` - capability detection and resolved output settings
//! - `primitives` / `widgets` - styled text, boxes, tables
//! - `views` - one renderer per command, returning strings
//! - `json` - NDJSON event stream for `--json`

pub mod context;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
