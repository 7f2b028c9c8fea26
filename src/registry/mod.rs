mod registry_value_path;

pub use registry_value_path::*;
