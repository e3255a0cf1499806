//! Modrinth integration: game version list, release lookup and downloads

pub mod client;
pub mod types;

pub use client::ModrinthClient;
pub use types::{GameVersion, ProjectVersion, ResolvedRelease, VersionFile};
