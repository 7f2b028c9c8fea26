use dprint_cli_core::types::ErrBox;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::Environment;
use crate::installer::ShortcutSpec;
use crate::registry::RegistryValuePath;

#[cfg(not(target_os = "windows"))]
use super::unix as sys_impl;
#[cfg(target_os = "windows")]
use super::windows as sys_impl;

#[derive(Clone)]
pub struct RealEnvironment {
    output_lock: Arc<Mutex<u8>>,
    is_verbose: bool,
}

impl RealEnvironment {
    pub fn new(is_verbose: bool) -> RealEnvironment {
        RealEnvironment {
            output_lock: Arc::new(Mutex::new(0)),
            is_verbose,
        }
    }
}

impl Environment for RealEnvironment {
    fn read_file_text(&self, file_path: &Path) -> Result<String, ErrBox> {
        log_verbose!(self, "Reading file: {}", file_path.display());
        match fs::read_to_string(file_path) {
            Ok(text) => Ok(text),
            Err(err) => err!("Error reading file {}: {}", file_path.display(), err.to_string()),
        }
    }

    fn path_exists(&self, file_path: &Path) -> bool {
        log_verbose!(self, "Checking path exists: {}", file_path.display());
        file_path.exists()
    }

    fn cwd(&self) -> Result<PathBuf, ErrBox> {
        Ok(std::env::current_dir()?)
    }

    fn get_desktop_dir(&self) -> Result<PathBuf, ErrBox> {
        log_verbose!(self, "Getting desktop directory.");
        let dir = dirs::desktop_dir().ok_or_else(|| err_obj!("Could not get desktop dir"))?;
        Ok(dir)
    }

    fn read_registry_value(&self, path: &RegistryValuePath) -> Result<String, ErrBox> {
        log_verbose!(self, "Reading registry value: {}", path);
        sys_impl::read_registry_value(path)
    }

    fn write_shortcut(&self, spec: &ShortcutSpec) -> Result<(), ErrBox> {
        log_verbose!(self, "Writing shortcut: {}", spec.output_path.display());
        // write beside the output then swap it in so a failed save never leaves a partial link
        let temp_path = get_temp_path(&spec.output_path);
        let result = save_lnk(spec, &temp_path);
        if result.is_err() && temp_path.exists() {
            let _ = fs::remove_file(&temp_path);
        }
        result
    }

    fn log(&self, text: &str) {
        let _g = self.output_lock.lock().unwrap();
        println!("{}", text);
    }

    fn log_error(&self, text: &str) {
        let _g = self.output_lock.lock().unwrap();
        eprintln!("{}", text);
    }

    fn is_verbose(&self) -> bool {
        self.is_verbose
    }
}

fn save_lnk(spec: &ShortcutSpec, temp_path: &Path) -> Result<(), ErrBox> {
    sys_impl::create_lnk(spec, temp_path)?;
    match fs::rename(temp_path, &spec.output_path) {
        Ok(_) => Ok(()),
        Err(err) => err!("Error moving {} into place: {}", temp_path.display(), err.to_string()),
    }
}

fn get_temp_path(output_path: &Path) -> PathBuf {
    output_path.with_extension(format!("lnk.{}.tmp", std::process::id()))
}
