//! The user-editable list of mods to bundle
//!
//! The list is an explicit owned value: commands load it from a
//! [`RegistryStore`], edit it, and save it back as a whole.

pub mod store;

pub use store::FileRegistryStore;

use crate::core::{BundleError, BundleResult};
use crate::di::RegistryStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Built-in list used when nothing (readable) is stored: (display name, host id)
pub const DEFAULT_MODS: &[(&str, &str)] = &[
    ("Sodium", "sodium"),
    ("Lithium", "lithium"),
    ("Fabric API", "fabric-api"),
    ("Iris Shaders", "iris"),
];

/// One mod to bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModDescriptor {
    pub display_name: String,
    pub slug: String,
    /// Project id or slug on the hosting service; identity key
    pub host_id: String,
}

impl ModDescriptor {
    /// Create a descriptor, deriving the slug from the host id
    pub fn new(display_name: &str, host_id: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            slug: host_id.to_lowercase(),
            host_id: host_id.to_string(),
        }
    }
}

/// Where a loaded registry came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    Stored,
    Defaulted(DefaultReason),
}

/// Why the built-in list was used instead of the stored one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultReason {
    /// Nothing has been stored yet
    Missing,
    /// A value exists but could not be read or parsed
    Unreadable(String),
}

/// Ordered list of mods, unique by host id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    mods: Vec<ModDescriptor>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Registry {
    /// The built-in list
    pub fn defaults() -> Self {
        Self {
            mods: DEFAULT_MODS
                .iter()
                .map(|(name, id)| ModDescriptor::new(name, id))
                .collect(),
        }
    }

    /// Wrap an existing list without validation
    pub fn from_mods(mods: Vec<ModDescriptor>) -> Self {
        Self { mods }
    }

    pub fn mods(&self) -> &[ModDescriptor] {
        &self.mods
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModDescriptor> {
        self.mods.iter()
    }

    pub fn len(&self) -> usize {
        self.mods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mods.is_empty()
    }

    pub fn contains(&self, host_id: &str) -> bool {
        self.position(host_id).is_some()
    }

    pub fn position(&self, host_id: &str) -> Option<usize> {
        self.mods.iter().position(|m| m.host_id == host_id)
    }

    /// Append a mod
    ///
    /// Both fields are trimmed. Fails without touching the list when either
    /// is empty or the host id is already present.
    pub fn add(&mut self, display_name: &str, host_id: &str) -> BundleResult<&ModDescriptor> {
        let display_name = display_name.trim();
        let host_id = host_id.trim();

        if display_name.is_empty() || host_id.is_empty() {
            return Err(BundleError::Registry(
                "Both a display name and a mod id are required".to_string(),
            ));
        }
        if self.contains(host_id) {
            return Err(BundleError::Registry(format!(
                "Mod '{}' is already in the list",
                host_id
            )));
        }

        self.mods.push(ModDescriptor::new(display_name, host_id));
        debug!("Added mod '{}' ({})", display_name, host_id);
        Ok(&self.mods[self.mods.len() - 1])
    }

    /// Remove the mod at a 0-based position; later entries shift down
    pub fn remove(&mut self, index: usize) -> BundleResult<ModDescriptor> {
        if index >= self.mods.len() {
            return Err(BundleError::Registry(format!(
                "No mod at position {} (the list has {})",
                index + 1,
                self.mods.len()
            )));
        }
        let removed = self.mods.remove(index);
        debug!("Removed mod '{}'", removed.host_id);
        Ok(removed)
    }

    /// Remove the mod with the given host id
    pub fn remove_by_id(&mut self, host_id: &str) -> BundleResult<ModDescriptor> {
        let index = self.position(host_id.trim()).ok_or_else(|| {
            BundleError::Registry(format!("Mod '{}' is not in the list", host_id.trim()))
        })?;
        self.remove(index)
    }

    /// Replace the list with the built-in defaults
    pub fn reset(&mut self) {
        self.mods = Self::defaults().mods;
    }

    /// Load the registry, falling back to the built-in list
    ///
    /// Never fails: a missing value or one that cannot be read or parsed
    /// takes the [`Registry::recover_defaults`] path.
    pub fn load(store: &dyn RegistryStore) -> (Self, LoadSource) {
        let contents = match store.read() {
            Ok(Some(contents)) => contents,
            Ok(None) => return Self::recover_defaults(DefaultReason::Missing),
            Err(e) => return Self::recover_defaults(DefaultReason::Unreadable(e.to_string())),
        };

        match Self::parse(&contents) {
            Ok(registry) => (registry, LoadSource::Stored),
            Err(e) => Self::recover_defaults(DefaultReason::Unreadable(e.to_string())),
        }
    }

    /// The named recovery path: built-in list plus the reason it was used
    pub fn recover_defaults(reason: DefaultReason) -> (Self, LoadSource) {
        if let DefaultReason::Unreadable(ref cause) = reason {
            warn!("Stored mod list is unreadable, using defaults: {}", cause);
        }
        (Self::defaults(), LoadSource::Defaulted(reason))
    }

    /// Overwrite the stored value with the full list
    pub fn save(&self, store: &dyn RegistryStore) -> BundleResult<()> {
        let contents = serde_json::to_string_pretty(&self.mods)?;
        store.write(&contents)
    }

    fn parse(contents: &str) -> BundleResult<Self> {
        let mods: Vec<ModDescriptor> = serde_json::from_str(contents)?;
        if let Some(bad) = mods
            .iter()
            .position(|m| m.display_name.trim().is_empty() || m.host_id.trim().is_empty())
        {
            return Err(BundleError::Registry(format!(
                "Stored entry {} has an empty name or id",
                bad + 1
            )));
        }
        Ok(Self { mods })
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a ModDescriptor;
    type IntoIter = std::slice::Iter<'a, ModDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.mods.iter()
    }
}
