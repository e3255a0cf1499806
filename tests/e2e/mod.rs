use assert_cmd::Command;
use assert_fs::{prelude::*, TempDir};
use std::path::PathBuf;

// Declare submodules
pub mod config;
pub mod fetch;
pub mod mods;
pub mod versions;

/// Test context that provides isolated environment for each test
pub struct TestContext {
    pub temp: TempDir,
    pub home: PathBuf,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Create a new test context with its own MODBUNDLE_HOME
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let home = temp.child("home").to_path_buf();
        std::fs::create_dir_all(&home).unwrap();

        Self { temp, home }
    }

    /// Create a Command for running modbundle with proper environment
    pub fn modbundle(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("modbundle").unwrap();
        cmd.current_dir(&self.temp);
        cmd.env("MODBUNDLE_HOME", &self.home);
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Point the API at `api_base_url` (a mock server)
    pub fn write_config(&self, api_base_url: &str) {
        self.temp
            .child("home/config.yaml")
            .write_str(&format!(
                "api_base_url: {}\nrequest_timeout_secs: 5\n",
                api_base_url
            ))
            .unwrap();
    }

    /// Replace the stored mod list
    pub fn write_mods(&self, json: &str) {
        self.temp.child("home/mods.json").write_str(json).unwrap();
    }

    pub fn mods_file(&self) -> PathBuf {
        self.home.join("mods.json")
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.join("config.yaml")
    }

    /// Run a command on a blocking thread, for tests that also drive a
    /// mock server on the async runtime
    pub async fn run_blocking(mut cmd: Command) -> assert_cmd::assert::Assert {
        tokio::task::spawn_blocking(move || cmd.assert())
            .await
            .unwrap()
    }
}
