use crate::core::{BundleError, BundleResult};
use std::io::{Cursor, Write};
use std::path::Path;
use tracing::debug;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Name of the generated manifest at the archive root
pub const MANIFEST_FILE_NAME: &str = "README.txt";

/// File name offered to the save sink for a run
pub fn archive_file_name(game_version: &str, loader: &str) -> String {
    format!("minecraft-mods-{}-{}.zip", game_version, loader)
}

/// In-memory zip accumulating mod files under a fixed subfolder
///
/// The manifest is written by [`ArchiveBuilder::finish`], so every finished
/// archive holds exactly one.
pub struct ArchiveBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    options: FileOptions,
    subfolder: String,
    entries: Vec<String>,
}

impl ArchiveBuilder {
    /// Create an empty archive whose mod files go under `subfolder`
    pub fn new(subfolder: &str, compression_level: i32) -> Self {
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(compression_level));

        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            options,
            subfolder: subfolder.trim_matches('/').to_string(),
            entries: Vec::new(),
        }
    }

    /// Add a downloaded mod file, returning its path inside the archive
    ///
    /// Fails without touching the archive when the name has no file
    /// component or an entry with the same path was already added.
    pub fn add_mod(&mut self, file_name: &str, contents: &[u8]) -> BundleResult<String> {
        let base_name = sanitize_file_name(file_name)?;
        let entry = format!("{}/{}", self.subfolder, base_name);
        if self.entries.contains(&entry) {
            return Err(BundleError::Archive(format!(
                "duplicate file name '{}'",
                base_name
            )));
        }

        self.writer.start_file(entry.as_str(), self.options)?;
        self.writer.write_all(contents)?;
        debug!("Added {} ({} bytes)", entry, contents.len());

        self.entries.push(entry.clone());
        Ok(entry)
    }

    #[cfg(test)]
    fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Write the manifest and finalize the archive into bytes
    pub fn finish(mut self, manifest: &str) -> BundleResult<Vec<u8>> {
        self.writer.start_file(MANIFEST_FILE_NAME, self.options)?;
        self.writer.write_all(manifest.as_bytes())?;

        let cursor = self.writer.finish()?;
        Ok(cursor.into_inner())
    }
}

/// Keep only the last path component of a file name from the API
fn sanitize_file_name(file_name: &str) -> BundleResult<&str> {
    Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| BundleError::Archive(format!("invalid file name '{}'", file_name)))
}
