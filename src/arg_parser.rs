use dprint_cli_core::types::ErrBox;

use crate::installer::Variant;

pub struct CliArgs {
    pub sub_command: SubCommand,
    pub verbose: bool,
}

#[derive(Debug, PartialEq)]
pub enum SubCommand {
    Install(InstallCommand),
    Version,
    Help(String),
}

#[derive(Debug, PartialEq, Default)]
pub struct InstallCommand {
    pub variant: Option<Variant>,
    pub desktop: bool,
    pub config_path: Option<String>,
}

pub fn parse_args(args: Vec<String>) -> Result<CliArgs, ErrBox> {
    let mut cli_parser = create_cli_parser();
    let matches = match cli_parser.get_matches_from_safe_borrow(args) {
        Ok(result) => result,
        Err(err) => return err!("{}", err.to_string()),
    };

    let sub_command = if matches.is_present("help") {
        SubCommand::Help({
            let mut text = Vec::new();
            cli_parser.write_help(&mut text)?;
            String::from_utf8(text)?
        })
    } else if matches.is_present("version") {
        SubCommand::Version
    } else {
        SubCommand::Install(InstallCommand {
            variant: match matches.value_of("variant") {
                Some(text) => Some(Variant::parse(text)?),
                None => None,
            },
            desktop: matches.is_present("desktop"),
            config_path: matches.value_of("config").map(String::from),
        })
    };

    Ok(CliArgs {
        sub_command,
        verbose: matches.is_present("verbose"),
    })
}

fn create_cli_parser<'a, 'b>() -> clap::App<'a, 'b> {
    use clap::{App, AppSettings, Arg};
    App::new("create-shortcut")
        .setting(AppSettings::UnifiedHelpMessage)
        .setting(AppSettings::DisableHelpFlags)
        .setting(AppSettings::DisableVersion)
        .setting(AppSettings::DeriveDisplayOrder)
        .bin_name("create-shortcut")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Creates a shortcut that starts mintty.exe from the current directory in the Cygwin bin directory.")
        .usage("create-shortcut [OPTIONS]")
        .template(r#"{bin} {version}

{about}

USAGE:
    {usage}

OPTIONS:
{unified}

{after-help}"#)
        .after_help(
            r#"The Cygwin root directory is read from the registry. Settings may be
overridden in a mintty-shortcut.json file in the current directory."#,
        )
        .arg(
            Arg::with_name("variant")
                .long("variant")
                .help("Which Cygwin installation layout to look up.")
                .takes_value(true)
                .possible_values(&["setup", "legacy"]),
        )
        .arg(
            Arg::with_name("desktop")
                .long("desktop")
                .help("Writes the shortcut to the desktop instead of the current directory.")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("config")
                .long("config")
                .short("c")
                .help("Path to a configuration file.")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .help("Prints additional diagnostic information.")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("help")
                .long("help")
                .short("h")
                .hidden(true)
                .takes_value(false),
        )
        .arg(
            Arg::with_name("version")
                .short("v")
                .long("version")
                .help("Prints the version.")
                .takes_value(false),
        )
}
