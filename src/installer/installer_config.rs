use dprint_cli_core::types::ErrBox;

use crate::registry::RegistryValuePath;

pub const DEFAULT_SUBDIRECTORY: &'static str = "bin";

/// How the subdirectory is appended to the base directory.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SubdirectoryJoin {
    /// `base + "\" + subdirectory`
    Separator,
    /// `base + subdirectory`
    Direct,
}

impl SubdirectoryJoin {
    pub fn join(&self, base_directory: &str, subdirectory: &str) -> String {
        match self {
            SubdirectoryJoin::Separator => format!("{}\\{}", base_directory, subdirectory),
            SubdirectoryJoin::Direct => format!("{}{}", base_directory, subdirectory),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct InstallerConfig {
    /// Keys tried in order until one can be read.
    pub registry_keys: Vec<RegistryValuePath>,
    pub output_file_name: String,
    pub arguments: String,
    pub subdirectory: String,
    pub subdirectory_join: SubdirectoryJoin,
    pub description: Option<String>,
    pub lookup_error_message: String,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Variant {
    /// Cygwin 1.7+ setup, which records its root in `Cygwin\setup`.
    Setup,
    /// Cygwin 1.5 and earlier, which recorded the root as the native path of the `/` mount.
    Legacy,
}

impl Default for Variant {
    fn default() -> Variant {
        Variant::Setup
    }
}

impl Variant {
    pub fn parse(text: &str) -> Result<Variant, ErrBox> {
        match text {
            "setup" => Ok(Variant::Setup),
            "legacy" => Ok(Variant::Legacy),
            _ => err!("Unknown variant '{}'. Expected 'setup' or 'legacy'.", text),
        }
    }

    pub fn installer_config(&self) -> InstallerConfig {
        match self {
            Variant::Setup => InstallerConfig {
                registry_keys: vec![
                    RegistryValuePath::local_machine("Software\\Cygwin\\setup", "rootdir"),
                    RegistryValuePath::local_machine("Software\\WoW6432Node\\Cygwin\\setup", "rootdir"),
                ],
                output_file_name: "mintty.lnk".to_string(),
                arguments: "-".to_string(),
                subdirectory: DEFAULT_SUBDIRECTORY.to_string(),
                subdirectory_join: SubdirectoryJoin::Separator,
                description: None,
                lookup_error_message: "Error: Could not find Cygwin registry key.".to_string(),
            },
            Variant::Legacy => InstallerConfig {
                registry_keys: vec![RegistryValuePath::local_machine(
                    "Software\\Cygnus Solutions\\Cygwin\\mounts v2\\/",
                    "native",
                )],
                output_file_name: "MinTTY.lnk".to_string(),
                arguments: "/bin/bash -l".to_string(),
                subdirectory: DEFAULT_SUBDIRECTORY.to_string(),
                subdirectory_join: SubdirectoryJoin::Direct,
                description: Some("Cygwin Terminal".to_string()),
                lookup_error_message: "Error: Could not read Cygwin registry key.".to_string(),
            },
        }
    }
}
