use crate::environment::Environment;

use super::{InstallError, ShortcutSpec};

pub fn write_shortcut<TEnvironment: Environment>(environment: &TEnvironment, spec: &ShortcutSpec) -> Result<(), InstallError> {
    match environment.write_shortcut(spec) {
        Ok(()) => Ok(()),
        Err(err) => Err(InstallError::Write {
            output_path: spec.output_path.clone(),
            source: err,
        }),
    }
}
