use dprint_cli_core::types::ErrBox;
use std::path::{Path, PathBuf};

use crate::environment::Environment;

pub const CONFIG_FILE_NAME: &'static str = "mintty-shortcut.json";

/// Gets the explicitly provided configuration file or the one in the current directory.
pub fn find_config_file(
    environment: &impl Environment,
    cwd: &Path,
    config_path: Option<&str>,
) -> Result<Option<PathBuf>, ErrBox> {
    if let Some(config_path) = config_path {
        let config_path = cwd.join(config_path);
        return if environment.path_exists(&config_path) {
            Ok(Some(config_path))
        } else {
            err!("Could not find configuration file at {}", config_path.display())
        };
    }

    let config_path = cwd.join(CONFIG_FILE_NAME);
    if environment.path_exists(&config_path) {
        Ok(Some(config_path))
    } else {
        Ok(None)
    }
}
