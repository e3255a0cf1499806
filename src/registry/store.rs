use crate::core::path::{ensure_dir, registry_file};
use crate::core::{BundleError, BundleResult};
use crate::di::RegistryStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Registry storage backed by a single JSON file (`<home>/mods.json`)
#[derive(Debug, Clone)]
pub struct FileRegistryStore {
    path: PathBuf,
}

impl FileRegistryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location in the modbundle home directory
    pub fn open_default() -> BundleResult<Self> {
        Ok(Self::new(registry_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RegistryStore for FileRegistryStore {
    fn read(&self) -> BundleResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn write(&self, contents: &str) -> BundleResult<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| BundleError::Path("Invalid registry path".to_string()))?;
        ensure_dir(dir)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
