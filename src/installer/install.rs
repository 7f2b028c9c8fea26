use std::path::Path;

use crate::environment::Environment;

use super::{build_shortcut_spec, resolve_base_directory, write_shortcut, InstallError, InstallerConfig, ShortcutSpec};

/// Looks up the base directory, composes the shortcut, then writes it.
///
/// Nothing is written when the lookup fails.
pub fn install<TEnvironment: Environment>(
    environment: &TEnvironment,
    config: &InstallerConfig,
    current_directory: &Path,
    output_dir: &Path,
) -> Result<ShortcutSpec, InstallError> {
    let base_directory = resolve_base_directory(environment, config)?;
    let spec = build_shortcut_spec(
        config,
        &base_directory,
        &current_directory.to_string_lossy(),
        output_dir,
    );
    write_shortcut(environment, &spec)?;
    Ok(spec)
}
