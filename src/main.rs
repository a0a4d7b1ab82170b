//! Main application entry point.
//!
//! Parses the command line, prepares the process-wide state (debug output,
//! config directory, JSON mode) and dispatches to the command handlers.
//! Errors from any handler end up here and become exit code 1.

use anyhow::Result;

use astrofacts::args::{self, CliAction, CommonFlags, ParsedArgs};
use astrofacts::commands;
use astrofacts::config::{self, Config, OutputFormat};
use astrofacts::constants::*;
use astrofacts::log_error_exit;
use astrofacts::logger::Log;

fn main() {
    let parsed_args = ParsedArgs::from_env();

    let code = match run(parsed_args.action) {
        Ok(code) => code,
        Err(e) => {
            log_error_exit!("{:#}", e);
            EXIT_FAILURE
        }
    };

    std::process::exit(code);
}

fn run(action: CliAction) -> Result<i32> {
    match action {
        CliAction::ShowVersion => {
            args::display_version_info();
            Ok(EXIT_SUCCESS)
        }
        CliAction::ShowHelp => {
            args::display_help();
            Ok(EXIT_SUCCESS)
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            Ok(EXIT_FAILURE)
        }
        CliAction::Help { command } => {
            commands::help::run_help_command(command.as_deref())?;
            Ok(EXIT_SUCCESS)
        }
        CliAction::Facts { common, input } => {
            let (config, json) = prepare(&common)?;
            commands::facts::handle_facts_command(&input, &config, json)?;
            Ok(EXIT_SUCCESS)
        }
        CliAction::Sun { common, month, day } => {
            let (_, json) = prepare(&common)?;
            commands::sun::handle_sun_command(month, day, json)?;
            Ok(EXIT_SUCCESS)
        }
        CliAction::Moon { common, instant } => {
            let (_, json) = prepare(&common)?;
            commands::moon::handle_moon_command(instant.as_deref(), json)?;
            Ok(EXIT_SUCCESS)
        }
        CliAction::Chinese { common, year } => {
            let (_, json) = prepare(&common)?;
            commands::chinese::handle_chinese_command(year, json)?;
            Ok(EXIT_SUCCESS)
        }
    }
}

/// Apply the shared flags and load the configuration.
///
/// Returns the config and whether output is JSON. JSON mode silences the
/// decorative logger so stdout carries only the document.
fn prepare(common: &CommonFlags) -> Result<(Config, bool)> {
    Log::set_debug(common.debug_enabled);
    config::set_config_dir(common.config_dir.clone())?;

    let config = config::load()?;
    let json = common.json || config.output() == OutputFormat::Json;
    Log::set_enabled(!json);

    config.log_config();
    Ok((config, json))
}
