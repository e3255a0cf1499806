//! Mock implementations of service traits for testing

use super::traits::{
    ArchiveSink, ConfigProvider, FileFetcher, ModResolver, ProgressReporter, RegistryStore,
    VersionSource,
};
use crate::core::{BundleError, BundleResult};
use crate::modrinth::types::{GameVersion, ResolvedRelease};
use crate::progress::Notification;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock configuration provider for testing
///
/// # Example
///
/// ```
/// use modbundle::di::mocks::MockConfigProvider;
/// use modbundle::di::ConfigProvider;
///
/// let mut config = MockConfigProvider::default();
/// config.archive_subfolder = "mods".to_string();
///
/// assert_eq!(config.compression_level(), 6);
/// ```
#[derive(Clone)]
pub struct MockConfigProvider {
    pub api_base_url: String,
    pub user_agent: String,
    pub request_timeout: Duration,
    pub archive_subfolder: String,
    pub compression_level: i32,
    pub output_dir: PathBuf,
}

impl Default for MockConfigProvider {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.modrinth.com/v2".to_string(),
            user_agent: "modbundle-tests".to_string(),
            request_timeout: Duration::from_secs(5),
            archive_subfolder: "mods".to_string(),
            compression_level: 6,
            output_dir: PathBuf::from("/tmp/modbundle-test-out"),
        }
    }
}

impl ConfigProvider for MockConfigProvider {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    fn archive_subfolder(&self) -> &str {
        &self.archive_subfolder
    }

    fn compression_level(&self) -> i32 {
        self.compression_level
    }

    fn output_dir(&self) -> BundleResult<PathBuf> {
        Ok(self.output_dir.clone())
    }
}

/// In-memory stand-in for the mod hosting API
///
/// Serves as version source, resolver and fetcher, and records every call so
/// tests can assert on ordering and on the absence of network traffic.
///
/// # Example
///
/// ```
/// use modbundle::di::mocks::MockModrinth;
///
/// let api = MockModrinth::new();
/// api.add_release("sodium", "1.20.1", "fabric", "sodium-fabric.jar", b"jar".to_vec());
/// assert_eq!(api.call_count(), 0);
/// ```
#[derive(Clone, Default)]
pub struct MockModrinth {
    versions: Arc<Mutex<Option<Vec<GameVersion>>>>,
    releases: Arc<Mutex<HashMap<(String, String, String), ResolvedRelease>>>,
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockModrinth {
    /// Create a mock with no versions, releases or files
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the game version list; without one, fetching versions fails
    pub fn set_versions(&self, versions: &[(&str, &str)]) {
        let versions = versions
            .iter()
            .map(|(version, version_type)| GameVersion {
                version: version.to_string(),
                version_type: version_type.to_string(),
                date: None,
                major: false,
            })
            .collect();
        *self.versions.lock().unwrap() = Some(versions);
    }

    /// Register a resolvable release whose file downloads successfully
    pub fn add_release(
        &self,
        host_id: &str,
        game_version: &str,
        loader: &str,
        file_name: &str,
        contents: Vec<u8>,
    ) {
        let url = format!("https://cdn.example/{}/{}", host_id, file_name);
        self.add_release_without_file(host_id, game_version, loader, file_name);
        self.files.lock().unwrap().insert(url, contents);
    }

    /// Register a resolvable release whose download fails
    pub fn add_release_without_file(
        &self,
        host_id: &str,
        game_version: &str,
        loader: &str,
        file_name: &str,
    ) {
        let release = ResolvedRelease {
            name: format!("{} release", host_id),
            version: format!("{}-1.0.0", host_id),
            download_url: format!("https://cdn.example/{}/{}", host_id, file_name),
            file_name: file_name.to_string(),
        };
        self.releases.lock().unwrap().insert(
            (
                host_id.to_string(),
                game_version.to_string(),
                loader.to_string(),
            ),
            release,
        );
    }

    /// Every call made so far, e.g. `resolve:sodium` or `fetch:<url>`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl VersionSource for MockModrinth {
    async fn fetch_versions(&self) -> BundleResult<Vec<GameVersion>> {
        self.record("versions".to_string());
        self.versions
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| BundleError::Download {
                url: "mock://tag/game_version".to_string(),
                status: 503,
            })
    }
}

#[async_trait]
impl ModResolver for MockModrinth {
    async fn resolve(
        &self,
        host_id: &str,
        game_version: &str,
        loader: &str,
    ) -> Option<ResolvedRelease> {
        self.record(format!("resolve:{}", host_id));
        self.releases
            .lock()
            .unwrap()
            .get(&(
                host_id.to_string(),
                game_version.to_string(),
                loader.to_string(),
            ))
            .cloned()
    }
}

#[async_trait]
impl FileFetcher for MockModrinth {
    async fn fetch(&self, url: &str, _file_name: &str) -> BundleResult<Vec<u8>> {
        self.record(format!("fetch:{}", url));
        self.files
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| BundleError::Download {
                url: url.to_string(),
                status: 404,
            })
    }
}

/// Mock registry store holding the serialized registry in memory
#[derive(Clone, Default)]
pub struct MockRegistryStore {
    contents: Arc<Mutex<Option<String>>>,
    fail: bool,
}

impl MockRegistryStore {
    /// Create an empty store (nothing saved yet)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `contents`
    pub fn with_contents(contents: &str) -> Self {
        Self {
            contents: Arc::new(Mutex::new(Some(contents.to_string()))),
            fail: false,
        }
    }

    /// Create a store whose reads and writes fail
    pub fn failing() -> Self {
        Self {
            contents: Arc::new(Mutex::new(None)),
            fail: true,
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }
}

impl RegistryStore for MockRegistryStore {
    fn read(&self) -> BundleResult<Option<String>> {
        if self.fail {
            return Err(BundleError::Path("mock store unavailable".to_string()));
        }
        Ok(self.contents.lock().unwrap().clone())
    }

    fn write(&self, contents: &str) -> BundleResult<()> {
        if self.fail {
            return Err(BundleError::Path("mock store unavailable".to_string()));
        }
        *self.contents.lock().unwrap() = Some(contents.to_string());
        Ok(())
    }
}

/// Mock archive sink capturing saved archives
#[derive(Clone, Default)]
pub struct MockArchiveSink {
    saved: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
    fail: bool,
}

impl MockArchiveSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink whose saves fail
    pub fn failing() -> Self {
        Self {
            saved: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    /// Saved archives as (file name, bytes)
    pub fn saved(&self) -> Vec<(String, Vec<u8>)> {
        self.saved.lock().unwrap().clone()
    }
}

impl ArchiveSink for MockArchiveSink {
    fn save(&self, bytes: &[u8], file_name: &str) -> BundleResult<PathBuf> {
        if self.fail {
            return Err(BundleError::Archive("disk full".to_string()));
        }
        self.saved
            .lock()
            .unwrap()
            .push((file_name.to_string(), bytes.to_vec()));
        Ok(PathBuf::from("/mock/out").join(file_name))
    }
}

/// Progress reporter recording every update and notification
#[derive(Clone, Default)]
pub struct RecordingReporter {
    updates: Arc<Mutex<Vec<(f64, String)>>>,
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> Vec<(f64, String)> {
        self.updates.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn update(&self, percent: f64, message: &str) {
        self.updates
            .lock()
            .unwrap()
            .push((percent, message.to_string()));
    }

    fn notify(&self, notification: &Notification) {
        self.notifications
            .lock()
            .unwrap()
            .push(notification.clone());
    }
}
