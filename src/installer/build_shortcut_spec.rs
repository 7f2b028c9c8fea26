use std::path::Path;

use super::{IconLocation, InstallerConfig, ShortcutSpec};

pub const EXECUTABLE_NAME: &'static str = "mintty.exe";
const ICON_INDEX: i32 = 0;

/// Composes the shortcut from the resolved base directory and the directory containing mintty.
///
/// Paths handed to the shortcut are always composed with Windows separators.
pub fn build_shortcut_spec(
    config: &InstallerConfig,
    base_directory: &str,
    current_directory: &str,
    output_dir: &Path,
) -> ShortcutSpec {
    let target_path = format!("{}\\{}", current_directory, EXECUTABLE_NAME);
    ShortcutSpec {
        arguments: config.arguments.clone(),
        working_directory: config.subdirectory_join.join(base_directory, &config.subdirectory),
        icon_location: IconLocation {
            path: target_path.clone(),
            index: ICON_INDEX,
        },
        description: config.description.clone(),
        output_path: output_dir.join(&config.output_file_name),
        target_path,
    }
}
