//! Modrinth API client implementation

use crate::core::{BundleError, BundleResult};
use crate::di::traits::{ConfigProvider, FileFetcher, ModResolver, VersionSource};
use crate::modrinth::types::{GameVersion, ProjectVersion, ResolvedRelease};
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Modrinth API client
///
/// Serves as version source, resolver and file fetcher. Requests are plain
/// one-shot GETs; nothing is cached or retried.
pub struct ModrinthClient {
    http_client: HttpClient,
    api_url: String,
}

impl ModrinthClient {
    /// Create a new Modrinth client
    pub fn new(config: &dyn ConfigProvider) -> BundleResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(config.user_agent())
                .map_err(|e| BundleError::Config(format!("Invalid user agent: {}", e)))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| BundleError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_url: config.api_base_url().to_string(),
        })
    }

    /// Get every game version known to Modrinth
    pub async fn get_game_versions(&self) -> BundleResult<Vec<GameVersion>> {
        let url = format!("{}/tag/game_version", self.api_url);
        self.api_get(&url).await
    }

    /// Get the versions of a project that support `game_version` and `loader`
    pub async fn get_project_versions(
        &self,
        host_id: &str,
        game_version: &str,
        loader: &str,
    ) -> BundleResult<Vec<ProjectVersion>> {
        let url = self.project_versions_url(host_id, game_version, loader)?;
        self.api_get(&url).await
    }

    /// Build the filtered project version URL
    ///
    /// Format: {api}/project/{id}/version?game_versions=["{v}"]&loaders=["{l}"]
    pub fn project_versions_url(
        &self,
        host_id: &str,
        game_version: &str,
        loader: &str,
    ) -> BundleResult<String> {
        let game_versions = serde_json::to_string(&[game_version])?;
        let loaders = serde_json::to_string(&[loader])?;
        Ok(format!(
            "{}/project/{}/version?game_versions={}&loaders={}",
            self.api_url,
            urlencoding::encode(host_id),
            urlencoding::encode(&game_versions),
            urlencoding::encode(&loaders)
        ))
    }

    /// Resolve the first matching release, `None` on a miss or any error
    pub async fn resolve_release(
        &self,
        host_id: &str,
        game_version: &str,
        loader: &str,
    ) -> Option<ResolvedRelease> {
        match self.get_project_versions(host_id, game_version, loader).await {
            Ok(versions) => {
                let release = versions.into_iter().next().and_then(|v| v.into_release());
                if release.is_none() {
                    debug!(
                        "No release of '{}' for {} ({})",
                        host_id, game_version, loader
                    );
                }
                release
            }
            Err(e) => {
                warn!("Failed to look up '{}': {}", host_id, e);
                None
            }
        }
    }

    /// Download a file into memory
    pub async fn download(&self, url: &str, file_name: &str) -> BundleResult<Vec<u8>> {
        debug!("Downloading {} from {}", file_name, url);
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BundleError::Download {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        debug!("Downloaded {} ({} bytes)", file_name, bytes.len());
        Ok(bytes.to_vec())
    }

    /// Make a GET request and decode the JSON body
    async fn api_get<T: DeserializeOwned>(&self, url: &str) -> BundleResult<T> {
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BundleError::Download {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl VersionSource for ModrinthClient {
    async fn fetch_versions(&self) -> BundleResult<Vec<GameVersion>> {
        self.get_game_versions().await
    }
}

#[async_trait]
impl ModResolver for ModrinthClient {
    async fn resolve(
        &self,
        host_id: &str,
        game_version: &str,
        loader: &str,
    ) -> Option<ResolvedRelease> {
        self.resolve_release(host_id, game_version, loader).await
    }
}

#[async_trait]
impl FileFetcher for ModrinthClient {
    async fn fetch(&self, url: &str, file_name: &str) -> BundleResult<Vec<u8>> {
        self.download(url, file_name).await
    }
}
