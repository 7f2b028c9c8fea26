use dprint_cli_core::types::ErrBox;
use std::fmt;
use std::path::PathBuf;

use crate::registry::RegistryValuePath;

/// The two points where installing a shortcut can abort.
#[derive(Debug)]
pub enum InstallError {
    /// None of the registry keys could be read.
    ConfigurationLookup {
        message: String,
        keys: Vec<RegistryValuePath>,
    },
    /// The shortcut could not be saved.
    Write { output_path: PathBuf, source: ErrBox },
}

impl fmt::Display for InstallError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InstallError::ConfigurationLookup { message, .. } => write!(f, "{}", message),
            InstallError::Write { .. } => write!(f, "Error: Could not write shortcut to disk."),
        }
    }
}

impl std::error::Error for InstallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InstallError::ConfigurationLookup { .. } => None,
            InstallError::Write { source, .. } => Some(&**source),
        }
    }
}
