mod find_config_file;
mod get_installer_config;
mod read_config_file;

pub use find_config_file::*;
pub use get_installer_config::*;
pub use read_config_file::*;
