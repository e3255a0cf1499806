//! Trait definitions for dependency injection

use crate::core::BundleResult;
use crate::modrinth::types::{GameVersion, ResolvedRelease};
use crate::progress::Notification;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

/// Trait for configuration access
///
/// Provides read-only access to application configuration.
/// Implementations should be thread-safe (Send + Sync).
pub trait ConfigProvider: Send + Sync {
    /// Get the mod hosting API base URL (no trailing slash)
    fn api_base_url(&self) -> &str;

    /// Get the User-Agent sent with API requests
    fn user_agent(&self) -> &str;

    /// Get the per-request timeout
    fn request_timeout(&self) -> Duration;

    /// Get the folder inside the archive that receives mod files
    fn archive_subfolder(&self) -> &str;

    /// Get the deflate level for archive entries
    fn compression_level(&self) -> i32;

    /// Get the directory finished archives are saved to
    fn output_dir(&self) -> BundleResult<PathBuf>;
}

/// Trait for the remote list of supported game versions
#[async_trait]
pub trait VersionSource: Send + Sync {
    /// Fetch all game versions, in the order the service returns them
    async fn fetch_versions(&self) -> BundleResult<Vec<GameVersion>>;
}

/// Trait for mapping a mod id plus version/loader to a downloadable release
#[async_trait]
pub trait ModResolver: Send + Sync {
    /// Resolve the release for `host_id` that supports `game_version` and
    /// `loader`.
    ///
    /// Returns `None` when nothing matches. Transport and HTTP errors are
    /// reported the same way; implementations never fail past this boundary.
    async fn resolve(
        &self,
        host_id: &str,
        game_version: &str,
        loader: &str,
    ) -> Option<ResolvedRelease>;
}

/// Trait for downloading a resolved release file
#[async_trait]
pub trait FileFetcher: Send + Sync {
    /// Download `url` into memory. `file_name` is used for diagnostics only.
    async fn fetch(&self, url: &str, file_name: &str) -> BundleResult<Vec<u8>>;
}

/// Trait for the local storage slot holding the serialized mod registry
///
/// The slot is read and overwritten as a whole.
pub trait RegistryStore: Send + Sync {
    /// Read the stored value, `None` when nothing has been stored yet
    fn read(&self) -> BundleResult<Option<String>>;

    /// Replace the stored value
    fn write(&self, contents: &str) -> BundleResult<()>;
}

/// Trait for handing a finished archive to the host environment
pub trait ArchiveSink: Send + Sync {
    /// Save `bytes` under the suggested `file_name`, returning where it went
    fn save(&self, bytes: &[u8], file_name: &str) -> BundleResult<PathBuf>;
}

/// Trait for reporting run progress and the final notification
pub trait ProgressReporter: Send + Sync {
    /// Report a percentage (0-100) and a short status text
    fn update(&self, percent: f64, message: &str);

    /// Report the final state of a run
    fn notify(&self, notification: &Notification);
}
