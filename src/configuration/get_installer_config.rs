use crate::installer::{InstallerConfig, Variant};

use super::ConfigFile;

/// Gets the variant's preset with any configuration file overrides applied.
///
/// A variant provided on the command line takes precedence over the one in the file.
pub fn get_installer_config(variant: Option<Variant>, config_file: Option<ConfigFile>) -> InstallerConfig {
    let config_file = config_file.unwrap_or_default();
    let variant = variant.or(config_file.variant).unwrap_or_default();
    let mut config = variant.installer_config();

    if let Some(registry_keys) = config_file.registry_keys {
        config.registry_keys = registry_keys;
    }
    if let Some(output_file) = config_file.output_file {
        config.output_file_name = output_file;
    }
    if let Some(arguments) = config_file.arguments {
        config.arguments = arguments;
    }
    if let Some(description) = config_file.description {
        config.description = Some(description);
    }

    config
}
