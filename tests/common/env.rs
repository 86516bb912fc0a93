//! Test environment builder for isolated mapprep runs.
//!
//! Provides `TestEnv` - temp directories for the screenshot source, the
//! addon content and game roots, and HOME, plus helpers to run the binary
//! against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Result of running the mapprep binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON, skipping blank lines
    pub fn events(&self) -> Vec<Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad NDJSON {l:?}: {e}")))
            .collect()
    }

    /// Event names in emission order
    pub fn event_names(&self) -> Vec<String> {
        self.events()
            .iter()
            .filter_map(|e| e["event"].as_str().map(str::to_string))
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    root: TempDir,
    mapprep_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        for dir in ["source", "content", "game", "home"] {
            std::fs::create_dir_all(root.path().join(dir)).unwrap();
        }
        Self {
            root,
            mapprep_bin: PathBuf::from(env!("CARGO_BIN_EXE_mapprep")),
        }
    }

    pub fn source(&self) -> PathBuf {
        self.root.path().join("source")
    }

    pub fn content_root(&self) -> PathBuf {
        self.root.path().join("content")
    }

    pub fn game_root(&self) -> PathBuf {
        self.root.path().join("game")
    }

    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// Path relative to the content root
    pub fn content_path(&self, relative: &str) -> PathBuf {
        self.content_root().join(relative)
    }

    /// Path relative to the game root
    pub fn game_path(&self, relative: &str) -> PathBuf {
        self.game_root().join(relative)
    }

    /// Run with `--source`, `--content-root` and `--game-root` filled in
    pub fn run_prepare(&self, args: &[&str]) -> TestResult {
        let source = self.source();
        let content = self.content_root();
        let game = self.game_root();
        let mut all = vec![
            "--source",
            source.to_str().unwrap(),
            "--content-root",
            content.to_str().unwrap(),
            "--game-root",
            game.to_str().unwrap(),
        ];
        all.extend_from_slice(args);
        self.run(&all)
    }

    /// Run the binary with exactly `args`
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.mapprep_bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join(".config"))
            .env("MAPPREP_TEST_HOME", self.home())
            .env("NO_COLOR", "1")
            .env_remove("MAPPREP_INSTALL_PATH")
            .env_remove("MAPPREP_ADDON")
            .env_remove("MAPPREP_COMPILER")
            .env_remove("MAPPREP_VERBOSITY")
            .env_remove("GITHUB_ACTIONS");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute mapprep");
        output_to_result(output)
    }

    /// Write `mapprep.toml` into the source directory
    pub fn write_source_config(&self, content: &str) {
        std::fs::write(self.source().join("mapprep.toml"), content).unwrap();
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
