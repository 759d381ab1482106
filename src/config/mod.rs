//! Configuration module for zodiac
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (ZODIAC_*)
//! 3. Project config (./.zodiac.toml)
//! 4. User config ($XDG_CONFIG_HOME/zodiac/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! The first config file found wins; files are not merged.

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, DisplayConfig, LoadedConfig, OutputConfig, Verbosity};
