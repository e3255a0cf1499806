//! Short suggestions appended to errors shown on the terminal.

use crate::core::error::BundleError;

/// Errors that can suggest what the user should try next.
pub trait ErrorHelp {
    fn help(&self) -> Option<&'static str>;
}

impl ErrorHelp for BundleError {
    fn help(&self) -> Option<&'static str> {
        match self {
            BundleError::Http(_) | BundleError::Download { .. } => {
                Some("Check your network connection and the api_base_url in config.yaml.")
            }
            BundleError::Validation(_) => Some(
                "Pass both --game-version and --loader, e.g. `modbundle fetch -v 1.20.1 -l fabric`.",
            ),
            BundleError::Registry(_) => Some("Run `modbundle mods list` to see the current mod list."),
            BundleError::Yaml(_) | BundleError::Config(_) => {
                Some("Run `modbundle config path` and fix or delete the config file.")
            }
            BundleError::RunFailed { .. } => Some(
                "Try another game version or loader, or check the mod ids with `modbundle mods list`.",
            ),
            BundleError::Archive(_) | BundleError::Zip(_) => {
                Some("Make sure the output directory exists and is writable.")
            }
            BundleError::Io(_) | BundleError::Json(_) | BundleError::Path(_) => None,
        }
    }
}

/// Format an error for display, followed by a help line when one applies.
pub fn format_error_with_help(err: &BundleError) -> String {
    match err.help() {
        Some(help) => format!("Error: {}\n  help: {}", err, help),
        None => format!("Error: {}", err),
    }
}
