use crate::core::path::ensure_dir;
use crate::core::BundleResult;
use crate::di::ArchiveSink;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Saves finished archives into a directory, replacing any file of the
/// same name
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ArchiveSink for DirectorySink {
    fn save(&self, bytes: &[u8], file_name: &str) -> BundleResult<PathBuf> {
        ensure_dir(&self.dir)?;
        let path = self.dir.join(file_name);
        fs::write(&path, bytes)?;
        info!("Saved {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }
}
