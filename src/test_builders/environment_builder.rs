use crate::environment::{Environment, TestEnvironment};

pub struct EnvironmentBuilder {
    environment: TestEnvironment,
}

impl EnvironmentBuilder {
    pub fn new() -> EnvironmentBuilder {
        EnvironmentBuilder {
            environment: TestEnvironment::new(),
        }
    }

    pub fn build(self) -> TestEnvironment {
        self.environment
    }

    pub fn cwd(self, path: &str) -> Self {
        self.environment.set_cwd(path);
        self
    }

    pub fn desktop_dir(self, path: &str) -> Self {
        self.environment.set_desktop_dir(path);
        self
    }

    pub fn verbose(self) -> Self {
        self.environment.set_verbose(true);
        self
    }

    pub fn registry_value(self, path: &str, value: &str) -> Self {
        self.environment.set_registry_value(path, value);
        self
    }

    /// Sets the root recorded by Cygwin's setup on 64-bit installs.
    pub fn cygwin_setup_root(self, value: &str) -> Self {
        self.registry_value("HKLM\\Software\\Cygwin\\setup\\rootdir", value)
    }

    pub fn fail_shortcut_writes(self) -> Self {
        self.environment.set_fail_shortcut_writes(true);
        self
    }

    /// Creates a file relative to the current directory.
    pub fn file(self, name: &str, text: &str) -> Self {
        let cwd = self.environment.cwd().unwrap();
        self.environment.write_file_text(&cwd.join(name), text);
        self
    }
}
