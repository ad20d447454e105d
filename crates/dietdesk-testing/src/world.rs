//! TestWorld pattern for declarative integration test setup.
//!
//! Provides an isolated data directory plus helpers to run the CLI
//! against it with proper context.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use dietdesk_testing::TestWorld;
///
/// let world = TestWorld::new();
/// world.login("abc123").unwrap();
/// world.run(&["session", "status"]).success();
/// ```
pub struct TestWorld {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".dietdesk");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    /// Get the data directory path (.dietdesk).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn token_path(&self) -> PathBuf {
        self.data_dir.join("token")
    }

    /// Store a token directly, bypassing the CLI.
    pub fn login(&self, token: &str) -> Result<()> {
        std::fs::write(self.token_path(), token)?;
        Ok(())
    }

    /// Point the client at a service base URL.
    pub fn configure(&self, base_url: &str) -> Result<()> {
        let content = format!("[api]\nbase_url = \"{}\"\ntimeout_secs = 5\n", base_url);
        std::fs::write(self.data_dir.join("config.toml"), content)?;
        Ok(())
    }

    /// dietdesk command wired to this world's data directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("dietdesk").expect("Failed to find dietdesk binary");
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Run the CLI with the given arguments and return the assertion
    /// handle.
    pub fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert()
    }
}
