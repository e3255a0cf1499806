use thiserror::Error;

pub type BundleResult<T> = Result<T, BundleError>;

#[derive(Error, Debug)]
pub enum BundleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Input rejected before any network call (missing version/loader).
    #[error("{0}")]
    Validation(String),

    /// Registry edit rejected; the registry is left untouched.
    #[error("Registry error: {0}")]
    Registry(String),

    #[error("Download failed for {url}: HTTP {status}")]
    Download { url: String, status: u16 },

    /// Finalizing or saving the archive failed.
    #[error("Archive error: {0}")]
    Archive(String),

    /// A run finished without a single downloaded mod.
    /// Should exit with code 1.
    #[error("No mods could be downloaded for {game_version} ({loader})")]
    RunFailed {
        game_version: String,
        loader: String,
    },
}
