//! Service container for dependency injection

use super::traits::{
    ArchiveSink, ConfigProvider, FileFetcher, ModResolver, RegistryStore, VersionSource,
};
use crate::archive::DirectorySink;
use crate::config::Config;
use crate::core::BundleResult;
use crate::modrinth::ModrinthClient;
use crate::registry::FileRegistryStore;
use std::path::PathBuf;
use std::sync::Arc;

/// Service container for dependency injection
///
/// Holds every external boundary of a run as a trait object, so tests can
/// swap in the in-memory implementations from [`super::mocks`].
///
/// # Example (Testing)
///
/// ```
/// use modbundle::di::{ServiceContainer, mocks::*};
/// use std::sync::Arc;
///
/// let api = Arc::new(MockModrinth::new());
/// let container = ServiceContainer::with_providers(
///     Arc::new(MockConfigProvider::default()),
///     api.clone(),
///     api.clone(),
///     api,
///     Arc::new(MockRegistryStore::new()),
///     Arc::new(MockArchiveSink::new()),
/// );
/// assert_eq!(container.config().archive_subfolder(), "mods");
/// ```
#[derive(Clone)]
pub struct ServiceContainer {
    pub config: Arc<dyn ConfigProvider>,
    pub versions: Arc<dyn VersionSource>,
    pub resolver: Arc<dyn ModResolver>,
    pub fetcher: Arc<dyn FileFetcher>,
    pub store: Arc<dyn RegistryStore>,
    pub sink: Arc<dyn ArchiveSink>,
}

impl ServiceContainer {
    /// Create a new service container with production implementations
    ///
    /// - Loads config from disk (creating a default one)
    /// - Builds one Modrinth client serving versions, releases and files
    /// - Stores the registry in `<home>/mods.json`
    /// - Saves archives into the configured output directory
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be loaded or created, or the
    /// HTTP client cannot be built.
    pub fn new() -> BundleResult<Self> {
        let config = Config::load()?;
        let client = Arc::new(ModrinthClient::new(&config)?);
        let output_dir = config.output_dir()?;

        Ok(Self {
            config: Arc::new(config),
            versions: client.clone(),
            resolver: client.clone(),
            fetcher: client,
            store: Arc::new(FileRegistryStore::open_default()?),
            sink: Arc::new(DirectorySink::new(output_dir)),
        })
    }

    /// Create a service container with custom provider implementations
    pub fn with_providers(
        config: Arc<dyn ConfigProvider>,
        versions: Arc<dyn VersionSource>,
        resolver: Arc<dyn ModResolver>,
        fetcher: Arc<dyn FileFetcher>,
        store: Arc<dyn RegistryStore>,
        sink: Arc<dyn ArchiveSink>,
    ) -> Self {
        Self {
            config,
            versions,
            resolver,
            fetcher,
            store,
            sink,
        }
    }

    /// Save archives into `dir` instead of the configured directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.sink = Arc::new(DirectorySink::new(dir));
        self
    }

    /// Get the configuration provider
    pub fn config(&self) -> &dyn ConfigProvider {
        self.config.as_ref()
    }

    /// Get the game version source
    pub fn versions(&self) -> &dyn VersionSource {
        self.versions.as_ref()
    }

    /// Get the release resolver
    pub fn resolver(&self) -> &dyn ModResolver {
        self.resolver.as_ref()
    }

    /// Get the file fetcher
    pub fn fetcher(&self) -> &dyn FileFetcher {
        self.fetcher.as_ref()
    }

    /// Get the registry store
    pub fn store(&self) -> &dyn RegistryStore {
        self.store.as_ref()
    }

    /// Get the archive sink
    pub fn sink(&self) -> &dyn ArchiveSink {
        self.sink.as_ref()
    }
}
