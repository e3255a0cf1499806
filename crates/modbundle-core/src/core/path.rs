use crate::core::error::{BundleError, BundleResult};
use std::path::{Path, PathBuf};

/// Environment variable overriding the modbundle home directory.
pub const HOME_ENV: &str = "MODBUNDLE_HOME";

/// Get the modbundle home directory
///
/// `$MODBUNDLE_HOME` wins when set. Otherwise, platform-specific locations:
/// - Windows: %APPDATA%\modbundle
/// - Linux: ~/.config/modbundle
/// - macOS: ~/Library/Application Support/modbundle
pub fn modbundle_home() -> BundleResult<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    let config_dir = dirs::config_dir()
        .ok_or_else(|| BundleError::Path("Could not determine config directory".to_string()))?;
    Ok(config_dir.join("modbundle"))
}

/// Get the config file path (`<home>/config.yaml`)
pub fn config_file() -> BundleResult<PathBuf> {
    Ok(modbundle_home()?.join("config.yaml"))
}

/// Get the stored mod registry path (`<home>/mods.json`)
pub fn registry_file() -> BundleResult<PathBuf> {
    Ok(modbundle_home()?.join("mods.json"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> BundleResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
