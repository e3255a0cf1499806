//! modbundle: bundle Minecraft mods into a single zip
//!
//! This crate provides the modbundle library, re-exporting core functionality
//! from `modbundle-core` and organizing the modules that resolve, download,
//! and package mods for a game version and loader.

pub use modbundle_core::{format_error_with_help, BundleError, BundleResult, ErrorHelp};

/// Core module re-exported from `modbundle-core`.
pub mod core {
    pub use modbundle_core::core::*;
}

/// Configuration management.
pub mod config;

/// User-editable mod list and its persistence.
pub mod registry;

/// Modrinth API client (version list, release lookup, file download).
pub mod modrinth;

/// Zip archive and README generation.
pub mod archive;

/// Progress and completion reporting.
pub mod progress;

/// The resolve/download/package run.
pub mod updater;

/// Dependency injection infrastructure.
pub mod di;
