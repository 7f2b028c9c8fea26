use dprint_cli_core::types::ErrBox;
use mslnk::{LinkFlags, ShellLink};
use std::path::Path;

use crate::installer::ShortcutSpec;
use crate::registry::{RegistryHive, RegistryValuePath};

pub fn read_registry_value(path: &RegistryValuePath) -> Result<String, ErrBox> {
    use winreg::{enums::*, RegKey};

    let hive = RegKey::predef(match path.hive {
        RegistryHive::LocalMachine => HKEY_LOCAL_MACHINE,
        RegistryHive::CurrentUser => HKEY_CURRENT_USER,
    });
    let key = hive.open_subkey_with_flags(&path.sub_key, KEY_READ)?;
    let value: String = key.get_value(&path.value_name)?;
    Ok(value)
}

pub fn create_lnk(spec: &ShortcutSpec, file_path: &Path) -> Result<(), ErrBox> {
    build_shell_link(spec).create_lnk(file_path)?;
    Ok(())
}

/// Describes the target from its path text alone, so the target
/// doesn't need to exist when the link is written.
fn build_shell_link(spec: &ShortcutSpec) -> ShellLink {
    let mut link = ShellLink::default();
    link.header_mut().set_link_flags(LinkFlags::IS_UNICODE);
    if has_drive_letter(&spec.target_path) {
        link.header_mut().update_link_flags(LinkFlags::HAS_LINK_TARGET_ID_LIST, true);
        if let Some(target) = link.linktarget_mut() {
            target.set_linktarget(&spec.target_path);
        }
    } else {
        // the item id list only covers drive paths, so others (ex. UNC shares) are stored whole
        link.set_relative_path(Some(spec.target_path.clone()));
    }
    link.set_arguments(Some(spec.arguments.clone()));
    link.set_working_dir(Some(spec.working_directory.clone()));
    link.set_icon_location(Some(spec.icon_location.path.clone()));
    link.header_mut().set_icon_index(spec.icon_location.index);
    link.set_name(spec.description.clone());
    link
}

fn has_drive_letter(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() > 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'\\'
}
