//! Tests for the config module

use super::loader::{suggest_key, with_env_overrides};
use super::types::*;
use crate::domain::value_objects::Locale;
use crate::error::ZodiacError;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.display.locale, Locale::Ko);
    assert_eq!(config.output.color, ColorMode::Auto);
    assert_eq!(config.output.verbosity, Verbosity::Normal);
    assert!(config.output.unicode);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[display]
locale = "en"

[output]
color = "never"
unicode = false
verbosity = "verbose"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.display.locale, Locale::En);
    assert_eq!(config.output.color, ColorMode::Never);
    assert!(!config.output.unicode);
    assert_eq!(config.output.verbosity, Verbosity::Verbose);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config: Config = toml::from_str("[output]\ncolor = \"always\"\n").unwrap();
    assert_eq!(config.output.color, ColorMode::Always);
    assert!(config.output.unicode);
    assert_eq!(config.display.locale, Locale::Ko);
}

#[test]
fn test_env_override_locale() {
    let config = with_env_overrides(Config::default(), env(&[("ZODIAC_LOCALE", "en_US.UTF-8")]));
    assert_eq!(config.display.locale, Locale::En);
}

#[test]
fn test_env_override_color_and_verbosity() {
    let config = with_env_overrides(
        Config::default(),
        env(&[("ZODIAC_COLOR", "NEVER"), ("ZODIAC_VERBOSITY", "debug")]),
    );
    assert_eq!(config.output.color, ColorMode::Never);
    assert_eq!(config.output.verbosity, Verbosity::Debug);
}

#[test]
fn test_env_override_ignores_garbage() {
    let config = with_env_overrides(
        Config::default(),
        env(&[("ZODIAC_LOCALE", "klingon"), ("ZODIAC_COLOR", "rainbow")]),
    );
    assert_eq!(config, Config::default());
}

#[test]
fn test_verbosity_maps_to_verbose_count() {
    assert_eq!(Verbosity::Quiet.as_verbose_count(), 0);
    assert_eq!(Verbosity::Normal.as_verbose_count(), 0);
    assert_eq!(Verbosity::Verbose.as_verbose_count(), 1);
    assert_eq!(Verbosity::Debug.as_verbose_count(), 2);
}

#[test]
fn test_config_load_with_warnings_reports_unknown_key_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    fs::write(&path, "[display]\nlocal = \"en\"\n").unwrap();

    let (_config, warnings) = Config::load_with_warnings(&path).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "local");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion, Some("locale".to_string()));
}

#[test]
fn test_suggest_key_rejects_distant_names() {
    assert_eq!(suggest_key("colour"), Some("color".to_string()));
    assert_eq!(suggest_key("something_else"), None);
}

#[test]
fn test_invalid_config_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[output]\ncolor = \"purple\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ZodiacError::InvalidConfig { .. }));
}

#[test]
fn test_discover_prefers_project_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(super::PROJECT_CONFIG_FILE),
        "[display]\nlocale = \"en\"\n",
    )
    .unwrap();

    let loaded = Config::discover(dir.path()).unwrap();
    assert_eq!(
        loaded.source.as_deref(),
        Some(dir.path().join(super::PROJECT_CONFIG_FILE).as_path())
    );
    assert!(loaded.warnings.is_empty());
}
