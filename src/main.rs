#[macro_use(err_obj)]
#[macro_use(err)]
extern crate dprint_cli_core;
#[macro_use]
extern crate lazy_static;
#[macro_use]
mod environment;

#[cfg(test)]
mod test_builders;

mod arg_parser;
mod configuration;
mod installer;
mod registry;

use arg_parser::*;
use dprint_cli_core::types::ErrBox;
use environment::Environment;
use installer::InstallError;

fn main() {
    let args = match parse_args(std::env::args().collect()) {
        Ok(args) => args,
        Err(err) => {
            report_error(&environment::RealEnvironment::new(false), &err);
            std::process::exit(1);
        }
    };
    let environment = environment::RealEnvironment::new(args.verbose);
    if let Err(err) = run(&environment, args) {
        report_error(&environment, &err);
        std::process::exit(1);
    }
}

fn report_error<TEnvironment: Environment>(environment: &TEnvironment, err: &ErrBox) {
    // installer failures are reported on stdout like any other console message
    if err.is::<InstallError>() {
        environment.log(&err.to_string());
    } else {
        environment.log_error(&err.to_string());
    }
}

fn run<TEnvironment: Environment>(environment: &TEnvironment, args: CliArgs) -> Result<(), ErrBox> {
    match args.sub_command {
        SubCommand::Help(text) => environment.log(&text),
        SubCommand::Version => environment.log(&format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))),
        SubCommand::Install(command) => handle_install_command(environment, command)?,
    }

    Ok(())
}

fn handle_install_command<TEnvironment: Environment>(
    environment: &TEnvironment,
    command: InstallCommand,
) -> Result<(), ErrBox> {
    let cwd = environment.cwd()?;
    let config_file = match configuration::find_config_file(environment, &cwd, command.config_path.as_deref())? {
        Some(config_path) => {
            log_verbose!(environment, "Using configuration file: {}", config_path.display());
            Some(configuration::read_config_file(&environment.read_file_text(&config_path)?)?)
        }
        None => None,
    };
    let config = configuration::get_installer_config(command.variant, config_file);
    let output_dir = if command.desktop {
        environment.get_desktop_dir()?
    } else {
        cwd.clone()
    };

    match installer::install(environment, &config, &cwd, &output_dir) {
        Ok(spec) => {
            log_verbose!(environment, "Created shortcut: {}", serde_json::to_string(&spec)?);
            Ok(())
        }
        Err(err) => {
            match &err {
                InstallError::ConfigurationLookup { keys, .. } => log_verbose!(
                    environment,
                    "No value found at: {}",
                    keys.iter().map(|key| key.to_string()).collect::<Vec<_>>().join(", ")
                ),
                InstallError::Write { output_path, source } => {
                    log_verbose!(environment, "Could not write {}: {}", output_path.display(), source.to_string())
                }
            }
            Err(err.into())
        }
    }
}
