//! Isolated test environment for running the zodiac binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Result of running a zodiac CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON, one value per non-empty line
    pub fn events(&self) -> Vec<Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not JSON: {l:?} ({e})\nstdout:\n{}", self.stdout))
            })
            .collect()
    }

    /// The `data` payload of the single `result` event
    pub fn result_data(&self) -> Value {
        let results: Vec<Value> = self
            .events()
            .into_iter()
            .filter(|e| e["event"] == "result")
            .collect();
        assert_eq!(results.len(), 1, "expected one result event:\n{}", self.stdout);
        results[0]["data"].clone()
    }
}

/// Project directory plus an empty config home, so no real user config leaks in.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("project tempdir"),
            home_dir: tempfile::tempdir().expect("home tempdir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_zodiac")),
        }
    }

    /// Write `.zodiac.toml` into the project directory
    pub fn write_project_config(&self, content: &str) -> PathBuf {
        let path = self.project_root.path().join(".zodiac.toml");
        std::fs::write(&path, content).expect("write project config");
        path
    }

    /// Write the user config under the isolated config home
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let dir = self.config_home().join("zodiac");
        std::fs::create_dir_all(&dir).expect("create user config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, content).expect("write user config");
        path
    }

    pub fn config_home(&self) -> PathBuf {
        self.home_dir.path().join(".config")
    }

    /// Run zodiac from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run zodiac from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("LANG", "en_US.UTF-8")
            .env("TERM", "xterm-256color")
            .env("NO_COLOR", "1")
            .env_remove("LC_ALL")
            .env_remove("LC_CTYPE")
            .env_remove("RUST_LOG")
            .env_remove("ZODIAC_LOCALE")
            .env_remove("ZODIAC_COLOR")
            .env_remove("ZODIAC_VERBOSITY");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        to_result(cmd.output().expect("failed to execute zodiac"))
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
