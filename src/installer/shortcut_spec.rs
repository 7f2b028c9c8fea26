use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Everything needed to write a shortcut. Built once and then only read.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutSpec {
    pub target_path: String,
    pub arguments: String,
    pub working_directory: String,
    pub icon_location: IconLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub output_path: PathBuf,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct IconLocation {
    pub path: String,
    pub index: i32,
}

impl fmt::Display for IconLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.path, self.index)
    }
}
