//! Zip archive assembly, the generated README, and saving to disk

pub mod builder;
pub mod manifest;
pub mod sink;

pub use builder::{archive_file_name, ArchiveBuilder, MANIFEST_FILE_NAME};
pub use manifest::Manifest;
pub use sink::DirectorySink;
