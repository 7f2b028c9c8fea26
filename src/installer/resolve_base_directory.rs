use crate::environment::Environment;

use super::{InstallError, InstallerConfig};

/// Gets the first readable registry value in the configured key order.
pub fn resolve_base_directory<TEnvironment: Environment>(
    environment: &TEnvironment,
    config: &InstallerConfig,
) -> Result<String, InstallError> {
    for key in config.registry_keys.iter() {
        match environment.read_registry_value(key) {
            Ok(value) => {
                log_verbose!(environment, "Found base directory '{}' at {}", value, key);
                return Ok(value);
            }
            Err(err) => log_verbose!(environment, "Could not read {}: {}", key, err.to_string()),
        }
    }

    Err(InstallError::ConfigurationLookup {
        message: config.lookup_error_message.clone(),
        keys: config.registry_keys.clone(),
    })
}
