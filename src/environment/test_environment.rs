use dprint_cli_core::types::ErrBox;
use path_clean::PathClean;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::Environment;
use crate::installer::ShortcutSpec;
use crate::registry::RegistryValuePath;

#[derive(Clone)]
pub struct TestEnvironment {
    is_verbose: Arc<Mutex<bool>>,
    cwd: Arc<Mutex<String>>,
    desktop_dir: Arc<Mutex<String>>,
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    registry: Arc<Mutex<HashMap<String, String>>>,
    fail_shortcut_writes: Arc<Mutex<bool>>,
    logged_messages: Arc<Mutex<Vec<String>>>,
    logged_errors: Arc<Mutex<Vec<String>>>,
}

impl TestEnvironment {
    pub fn new() -> TestEnvironment {
        TestEnvironment {
            is_verbose: Arc::new(Mutex::new(false)),
            cwd: Arc::new(Mutex::new(String::from("C:\\mintty"))),
            desktop_dir: Arc::new(Mutex::new(String::from("C:\\Users\\user\\Desktop"))),
            files: Arc::new(Mutex::new(HashMap::new())),
            registry: Arc::new(Mutex::new(HashMap::new())),
            fail_shortcut_writes: Arc::new(Mutex::new(false)),
            logged_messages: Arc::new(Mutex::new(Vec::new())),
            logged_errors: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn take_logged_messages(&self) -> Vec<String> {
        self.logged_messages.lock().unwrap().drain(..).collect()
    }

    pub fn take_logged_errors(&self) -> Vec<String> {
        self.logged_errors.lock().unwrap().drain(..).collect()
    }

    pub fn set_cwd(&self, new_path: &str) {
        let mut cwd = self.cwd.lock().unwrap();
        *cwd = String::from(new_path);
    }

    pub fn set_desktop_dir(&self, new_path: &str) {
        let mut desktop_dir = self.desktop_dir.lock().unwrap();
        *desktop_dir = String::from(new_path);
    }

    pub fn set_verbose(&self, value: bool) {
        let mut is_verbose = self.is_verbose.lock().unwrap();
        *is_verbose = value;
    }

    pub fn set_registry_value(&self, path: &str, value: &str) {
        let mut registry = self.registry.lock().unwrap();
        registry.insert(path.to_string(), value.to_string());
    }

    pub fn set_fail_shortcut_writes(&self, value: bool) {
        let mut fail_shortcut_writes = self.fail_shortcut_writes.lock().unwrap();
        *fail_shortcut_writes = value;
    }

    pub fn write_file_text(&self, file_path: &Path, text: &str) {
        let mut files = self.files.lock().unwrap();
        files.insert(file_path.to_path_buf().clean(), text.as_bytes().to_vec());
    }

    pub fn read_file(&self, file_path: &Path) -> Option<Vec<u8>> {
        let files = self.files.lock().unwrap();
        files.get(&file_path.to_path_buf().clean()).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        // If this panics that means the logged messages or errors weren't inspected for a test.
        // Use take_logged_messages() or take_logged_errors() and inspect the results.
        if !std::thread::panicking() && Arc::strong_count(&self.logged_messages) == 1 {
            assert_eq!(
                self.logged_messages.lock().unwrap().clone(),
                Vec::<String>::new(),
                "should not have logged messages left on drop"
            );
            assert_eq!(
                self.logged_errors.lock().unwrap().clone(),
                Vec::<String>::new(),
                "should not have logged errors left on drop"
            );
        }
    }
}

impl Environment for TestEnvironment {
    fn read_file_text(&self, file_path: &Path) -> Result<String, ErrBox> {
        match self.read_file(file_path) {
            Some(bytes) => Ok(String::from_utf8(bytes)?),
            None => err!("Could not find file at path {}", file_path.display()),
        }
    }

    fn path_exists(&self, file_path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        files.contains_key(&file_path.to_path_buf().clean())
    }

    fn cwd(&self) -> Result<PathBuf, ErrBox> {
        let cwd = self.cwd.lock().unwrap();
        Ok(PathBuf::from(cwd.to_owned()))
    }

    fn get_desktop_dir(&self) -> Result<PathBuf, ErrBox> {
        let desktop_dir = self.desktop_dir.lock().unwrap();
        Ok(PathBuf::from(desktop_dir.to_owned()))
    }

    fn read_registry_value(&self, path: &RegistryValuePath) -> Result<String, ErrBox> {
        let registry = self.registry.lock().unwrap();
        match registry.get(&path.to_string()) {
            Some(value) => Ok(value.clone()),
            None => err!("The system cannot find the registry value {}", path),
        }
    }

    fn write_shortcut(&self, spec: &ShortcutSpec) -> Result<(), ErrBox> {
        if *self.fail_shortcut_writes.lock().unwrap() {
            return err!("Access is denied: {}", spec.output_path.display());
        }
        // store the serialized spec as the artifact so identical specs produce identical bytes
        let bytes = serde_json::to_vec_pretty(spec)?;
        let mut files = self.files.lock().unwrap();
        files.insert(spec.output_path.clean(), bytes);
        Ok(())
    }

    fn log(&self, text: &str) {
        self.logged_messages.lock().unwrap().push(String::from(text));
    }

    fn log_error(&self, text: &str) {
        self.logged_errors.lock().unwrap().push(String::from(text));
    }

    fn is_verbose(&self) -> bool {
        *self.is_verbose.lock().unwrap()
    }
}
