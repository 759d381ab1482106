//! What the attached terminal can show.

use is_terminal::IsTerminal;

/// Variables whose presence marks a CI run
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "JENKINS_HOME",
    "BUILDKITE",
    "CIRCLECI",
    "TRAVIS",
    "TEAMCITY_VERSION",
];

/// Checked in order; the first non-empty one decides the charset
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

const FALLBACK_WIDTH: u16 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    /// Interactive prompts need a terminal on both ends
    pub stdin_is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
    pub width: u16,
}

/// Raw facts about the process, gathered once and then interpreted
struct Probe<F> {
    env: F,
    stdout_tty: bool,
    stdin_tty: bool,
    columns: Option<u16>,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    interpret(Probe {
        env: |key: &str| std::env::var(key).ok(),
        stdout_tty: std::io::stdout().is_terminal(),
        stdin_tty: std::io::stdin().is_terminal(),
        columns: crossterm::terminal::size().ok().map(|(cols, _)| cols),
    })
}

fn interpret<F: Fn(&str) -> Option<String>>(probe: Probe<F>) -> TerminalCapabilities {
    let var = |key: &str| (probe.env)(key).filter(|v| !v.is_empty());

    let dumb = var("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
    let no_color = var("NO_COLOR").is_some();
    let ascii_only = LOCALE_VARS
        .iter()
        .find_map(|&k| var(k))
        .is_some_and(|v| v == "C" || v == "POSIX");

    TerminalCapabilities {
        is_tty: probe.stdout_tty,
        stdin_is_tty: probe.stdin_tty,
        supports_color: probe.stdout_tty && !dumb && !no_color,
        supports_unicode: !dumb && !ascii_only,
        is_ci: CI_VARS.iter().any(|&k| (probe.env)(k).is_some()),
        width: probe.columns.unwrap_or(FALLBACK_WIDTH),
    }
}
