//! Core utilities shared by the modbundle binary and library.
//!
//! Holds the error taxonomy, user-facing error help, and the on-disk
//! locations of configuration and the stored mod registry.

pub mod core;

pub use crate::core::error::{BundleError, BundleResult};
pub use crate::core::error_help::{format_error_with_help, ErrorHelp};
