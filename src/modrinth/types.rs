//! Modrinth API type definitions

use serde::{Deserialize, Serialize};

/// Entry of `GET /tag/game_version`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameVersion {
    pub version: String,
    /// "release", "snapshot", "alpha" or "beta"
    #[serde(default)]
    pub version_type: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub major: bool,
}

impl GameVersion {
    pub fn is_release(&self) -> bool {
        self.version_type == "release"
    }
}

/// Entry of `GET /project/{id}/version`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectVersion {
    pub name: String,
    pub version_number: String,
    #[serde(default)]
    pub game_versions: Vec<String>,
    #[serde(default)]
    pub loaders: Vec<String>,
    #[serde(default)]
    pub files: Vec<VersionFile>,
}

/// Downloadable file of a project version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionFile {
    pub url: String,
    pub filename: String,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub size: Option<u64>,
}

/// Release picked for one registry entry during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRelease {
    pub name: String,
    pub version: String,
    pub download_url: String,
    pub file_name: String,
}

impl ProjectVersion {
    /// Convert into a resolved release using the first file reference.
    ///
    /// Returns `None` for a version that lists no files.
    pub fn into_release(self) -> Option<ResolvedRelease> {
        let file = self.files.into_iter().next()?;
        Some(ResolvedRelease {
            name: self.name,
            version: self.version_number,
            download_url: file.url,
            file_name: file.filename,
        })
    }
}
