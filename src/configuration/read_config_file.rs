use dprint_cli_core::types::ErrBox;
use jsonc_parser::{parse_to_value, JsonValue};

use crate::installer::Variant;
use crate::registry::RegistryValuePath;

/// Overrides for the selected variant. Every key is optional.
#[derive(Debug, PartialEq, Default)]
pub struct ConfigFile {
    pub variant: Option<Variant>,
    pub registry_keys: Option<Vec<RegistryValuePath>>,
    pub output_file: Option<String>,
    pub arguments: Option<String>,
    pub description: Option<String>,
}

pub fn read_config_file(file_text: &str) -> Result<ConfigFile, ErrBox> {
    let value = parse_to_value(file_text)?;
    let root_object_node = match value {
        Some(JsonValue::Object(obj)) => obj,
        _ => return err!("Expected a root object in the json"),
    };

    let mut config_file = ConfigFile::default();
    for (key, value) in root_object_node.into_iter() {
        match &*key {
            "variant" => config_file.variant = Some(Variant::parse(&get_string(&key, value)?)?),
            "registryKeys" => config_file.registry_keys = Some(get_registry_keys(value)?),
            "outputFile" => config_file.output_file = Some(get_string(&key, value)?),
            "arguments" => config_file.arguments = Some(get_string(&key, value)?),
            "description" => config_file.description = Some(get_string(&key, value)?),
            _ => return err!("Unknown key in configuration file: {}", key),
        }
    }

    Ok(config_file)
}

fn get_string(key: &str, value: JsonValue) -> Result<String, ErrBox> {
    match value {
        JsonValue::String(text) => Ok(text.to_string()),
        _ => err!("Expected a string for '{}'.", key),
    }
}

fn get_registry_keys(value: JsonValue) -> Result<Vec<RegistryValuePath>, ErrBox> {
    let json_keys = match value {
        JsonValue::Array(json_keys) => json_keys,
        _ => return err!("Expected a 'registryKeys' array."),
    };

    let mut registry_keys = Vec::new();
    for value in json_keys.into_iter() {
        match value {
            JsonValue::String(text) => registry_keys.push(RegistryValuePath::parse(&text)?),
            _ => return err!("Expected a string for all items in 'registryKeys' array."),
        }
    }

    if registry_keys.is_empty() {
        return err!("Expected at least one item in 'registryKeys' array.");
    }

    Ok(registry_keys)
}
