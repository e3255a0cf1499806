use crate::core::path::{config_file, ensure_dir};
use crate::core::{BundleError, BundleResult};
use crate::di::ConfigProvider;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Modrinth API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// User-Agent sent with every request (Modrinth rejects anonymous clients)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Folder inside the archive that receives the mod files
    #[serde(default = "default_archive_subfolder")]
    pub archive_subfolder: String,

    /// Deflate level used for archive entries (0-9)
    #[serde(default = "default_compression_level")]
    pub compression_level: i32,

    /// Directory the finished archive is written to (defaults to the
    /// current directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
}

fn default_api_base_url() -> String {
    "https://api.modrinth.com/v2".to_string()
}

fn default_user_agent() -> String {
    format!("modbundle/{}", env!("CARGO_PKG_VERSION"))
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_archive_subfolder() -> String {
    "mods".to_string()
}

fn default_compression_level() -> i32 {
    6
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            user_agent: default_user_agent(),
            request_timeout_secs: default_request_timeout_secs(),
            archive_subfolder: default_archive_subfolder(),
            compression_level: default_compression_level(),
            output_dir: None,
        }
    }
}

impl Config {
    /// Load config from the modbundle home directory, creating a default one
    /// if it doesn't exist
    ///
    /// Config locations:
    /// - `$MODBUNDLE_HOME/config.yaml` when the variable is set
    /// - Windows: %APPDATA%\modbundle\config.yaml
    /// - Linux: ~/.config/modbundle/config.yaml
    /// - macOS: ~/Library/Application Support/modbundle/config.yaml
    pub fn load() -> BundleResult<Self> {
        Self::load_from(&config_file()?)
    }

    /// Load config from an explicit path, creating a default one if missing
    pub fn load_from(path: &Path) -> BundleResult<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| BundleError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        Ok(config)
    }

    /// Save config to the modbundle home directory
    pub fn save(&self) -> BundleResult<()> {
        self.save_to(&config_file()?)
    }

    pub fn save_to(&self, path: &Path) -> BundleResult<()> {
        let config_dir = path
            .parent()
            .ok_or_else(|| BundleError::Path("Invalid config path".to_string()))?;
        ensure_dir(config_dir)?;

        let content = serde_yaml::to_string(self)
            .map_err(|e| BundleError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the archive builder or HTTP client cannot work with
    pub fn validate(&self) -> BundleResult<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(BundleError::Config("api_base_url must not be empty".to_string()));
        }
        if !(0..=9).contains(&self.compression_level) {
            return Err(BundleError::Config(format!(
                "compression_level must be between 0 and 9, got {}",
                self.compression_level
            )));
        }
        let subfolder = self.archive_subfolder.trim_matches('/');
        if subfolder.is_empty() || subfolder.contains("..") {
            return Err(BundleError::Config(format!(
                "archive_subfolder '{}' is not a valid folder name",
                self.archive_subfolder
            )));
        }
        Ok(())
    }

    /// Get the directory finished archives are written to
    pub fn get_output_dir(&self) -> BundleResult<PathBuf> {
        if let Some(ref dir) = self.output_dir {
            Ok(PathBuf::from(dir))
        } else {
            std::env::current_dir()
                .map_err(|e| BundleError::Path(format!("Failed to get current directory: {}", e)))
        }
    }
}

// Implement ConfigProvider trait
impl ConfigProvider for Config {
    fn api_base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn archive_subfolder(&self) -> &str {
        self.archive_subfolder.trim_matches('/')
    }

    fn compression_level(&self) -> i32 {
        self.compression_level
    }

    fn output_dir(&self) -> BundleResult<PathBuf> {
        self.get_output_dir()
    }
}
