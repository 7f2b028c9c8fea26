use dprint_cli_core::types::ErrBox;
use std::path::Path;

use crate::installer::ShortcutSpec;
use crate::registry::RegistryValuePath;

pub fn read_registry_value(path: &RegistryValuePath) -> Result<String, ErrBox> {
    err!("Could not read {}: the registry is not available on this platform.", path)
}

pub fn create_lnk(_spec: &ShortcutSpec, file_path: &Path) -> Result<(), ErrBox> {
    err!("Could not write {}: shell links can only be created on Windows.", file_path.display())
}
