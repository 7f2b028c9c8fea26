use dprint_cli_core::types::ErrBox;
use regex::Regex;
use std::fmt;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RegistryHive {
    LocalMachine,
    CurrentUser,
}

impl RegistryHive {
    pub fn parse(text: &str) -> Result<RegistryHive, ErrBox> {
        match text.to_uppercase().as_str() {
            "HKLM" | "HKEY_LOCAL_MACHINE" => Ok(RegistryHive::LocalMachine),
            "HKCU" | "HKEY_CURRENT_USER" => Ok(RegistryHive::CurrentUser),
            _ => err!("Unknown registry hive: {}", text),
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            RegistryHive::LocalMachine => "HKLM",
            RegistryHive::CurrentUser => "HKCU",
        }
    }
}

/// A named value under a registry key, such as `HKLM\Software\Cygwin\setup\rootdir`.
#[derive(Debug, PartialEq, Clone)]
pub struct RegistryValuePath {
    pub hive: RegistryHive,
    pub sub_key: String,
    pub value_name: String,
}

impl RegistryValuePath {
    pub fn local_machine(sub_key: &str, value_name: &str) -> RegistryValuePath {
        RegistryValuePath {
            hive: RegistryHive::LocalMachine,
            sub_key: sub_key.to_string(),
            value_name: value_name.to_string(),
        }
    }

    /// Parses a full value path where the text after the last backslash is the value name.
    pub fn parse(text: &str) -> Result<RegistryValuePath, ErrBox> {
        lazy_static! {
            static ref VALUE_PATH_RE: Regex = Regex::new(r"^([^\\]+)\\(.+)\\([^\\]+)$").unwrap();
        }
        let text = text.trim();
        let captures = match VALUE_PATH_RE.captures(text) {
            Some(captures) => captures,
            None => return err!("Expected a registry value path like HKLM\\Key\\Value, but found: {}", text),
        };

        Ok(RegistryValuePath {
            hive: RegistryHive::parse(&captures[1])?,
            sub_key: captures[2].to_string(),
            value_name: captures[3].to_string(),
        })
    }
}

impl fmt::Display for RegistryValuePath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\\{}\\{}", self.hive.short_name(), self.sub_key, self.value_name)
    }
}
