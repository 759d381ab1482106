//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::Locale;
use crate::error::{ZodiacError, ZodiacResult};

use super::types::{ColorMode, Config, LoadedConfig, Verbosity};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".zodiac.toml";

/// An unknown key found while loading a config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Parse a config file, turning keys serde did not consume into warnings.
pub fn load_with_warnings(path: &Path) -> ZodiacResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut ignored = Vec::new();
    let config: Config =
        serde_ignored::deserialize(toml::de::Deserializer::new(&content), |p| {
            ignored.push(p.to_string())
        })
        .map_err(|e| ZodiacError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let warnings = ignored
        .iter()
        .map(|dotted| {
            // "display.local" -> "local"
            let key = dotted.rsplit('.').next().unwrap_or(dotted.as_str());
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: find_line_number(&content, key),
                suggestion: suggest_key(key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find the first config file in the hierarchy and apply env overrides.
///
/// A file that exists but fails to parse is an error rather than a silent
/// fallback to defaults.
pub fn discover(project_root: &Path) -> ZodiacResult<LoadedConfig> {
    let candidates = [Some(project_root.join(PROJECT_CONFIG_FILE)), user_config_path()];

    for path in candidates.into_iter().flatten() {
        if !path.is_file() {
            continue;
        }
        let (config, warnings) = load_with_warnings(&path)?;
        tracing::debug!(path = %path.display(), warnings = warnings.len(), "loaded config");
        return Ok(LoadedConfig {
            config: config.with_env_overrides(),
            source: Some(path),
            warnings,
        });
    }

    tracing::debug!("no config file found, using defaults");
    Ok(LoadedConfig {
        config: Config::default().with_env_overrides(),
        source: None,
        warnings: Vec::new(),
    })
}

/// Apply ZODIAC_* overrides using `lookup` to read variables.
///
/// Unrecognized values are ignored with a warning log.
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup("ZODIAC_LOCALE") {
        match Locale::from_tag(&value) {
            Some(locale) => config.display.locale = locale,
            None => tracing::warn!(%value, "ignoring unknown ZODIAC_LOCALE"),
        }
    }

    if let Some(value) = lookup("ZODIAC_COLOR") {
        match ColorMode::parse(&value) {
            Some(color) => config.output.color = color,
            None => tracing::warn!(%value, "ignoring unknown ZODIAC_COLOR"),
        }
    }

    if let Some(value) = lookup("ZODIAC_VERBOSITY") {
        match Verbosity::parse(&value) {
            Some(verbosity) => config.output.verbosity = verbosity,
            None => tracing::warn!(%value, "ignoring unknown ZODIAC_VERBOSITY"),
        }
    }

    config
}

/// User config location: `$XDG_CONFIG_HOME/zodiac/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|dir| dir.join("zodiac").join("config.toml"))
}

fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["display", "locale", "output", "color", "unicode", "verbosity"];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

/// Edit distance over bytes; keys are ASCII
fn levenshtein(a: &str, b: &str) -> usize {
    let b = b.as_bytes();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.bytes().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ca != cb);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }
    row[b.len()]
}
