mod build_shortcut_spec;
mod install;
mod install_error;
mod installer_config;
mod resolve_base_directory;
mod shortcut_spec;
mod write_shortcut;

pub use build_shortcut_spec::*;
pub use install::*;
pub use install_error::*;
pub use installer_config::*;
pub use resolve_base_directory::*;
pub use shortcut_spec::*;
pub use write_shortcut::*;
