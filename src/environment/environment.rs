use dprint_cli_core::types::ErrBox;
use std::path::{Path, PathBuf};

use crate::installer::ShortcutSpec;
use crate::registry::RegistryValuePath;

pub trait Environment: Clone + std::marker::Send + std::marker::Sync + 'static {
    fn read_file_text(&self, file_path: &Path) -> Result<String, ErrBox>;
    fn path_exists(&self, file_path: &Path) -> bool;
    fn cwd(&self) -> Result<PathBuf, ErrBox>;
    /// Gets the current user's desktop directory.
    fn get_desktop_dir(&self) -> Result<PathBuf, ErrBox>;
    /// Reads a string value from the system configuration registry.
    fn read_registry_value(&self, path: &RegistryValuePath) -> Result<String, ErrBox>;
    /// Saves the shortcut to `spec.output_path`, replacing any existing file.
    ///
    /// Either the whole shortcut is written or the output path is left untouched.
    fn write_shortcut(&self, spec: &ShortcutSpec) -> Result<(), ErrBox>;
    fn log(&self, text: &str);
    fn log_error(&self, text: &str);
    fn is_verbose(&self) -> bool;
}

// use a macro here so the expression provided is only evaluated when in verbose mode
macro_rules! log_verbose {
    ($environment:expr, $($arg:tt)*) => {
        if $environment.is_verbose() {
            let mut text = String::from("[VERBOSE]: ");
            text.push_str(&format!($($arg)*));
            $environment.log(&text);
        }
    }
}
