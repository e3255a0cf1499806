//! Dependency injection infrastructure for modbundle
//!
//! Every external boundary of a run (config, the mod hosting API, registry
//! storage, the archive save target, progress output) sits behind a trait,
//! so the run logic can be exercised without network or disk.
//!
//! # Example (Production)
//! ```no_run
//! use modbundle::di::ServiceContainer;
//!
//! # fn example() -> modbundle::core::BundleResult<()> {
//! let container = ServiceContainer::new()?;
//! # Ok(())
//! # }
//! ```

pub mod container;
pub mod mocks;
pub mod traits;

// Re-export key types
pub use container::ServiceContainer;
pub use traits::{
    ArchiveSink, ConfigProvider, FileFetcher, ModResolver, ProgressReporter, RegistryStore,
    VersionSource,
};
