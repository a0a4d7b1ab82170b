//! Help command implementation for astrofacts.
//!
//! Dispatches to the command-specific help pages, or shows the command
//! overview when no command is named.

use anyhow::Result;

/// Run the help command (dispatcher)
///
/// # Arguments
/// * `command` - Optional command name to get help for (None = general help)
pub fn run_help_command(command: Option<&str>) -> Result<()> {
    match command {
        None => display_general_help(),
        Some("facts") | Some("f") => super::facts::display_help(),
        Some("sun") | Some("s") => super::sun::display_help(),
        Some("moon") | Some("m") => super::moon::display_help(),
        Some("chinese") | Some("c") => super::chinese::display_help(),
        Some("help") | Some("h") => display_help_help(),
        Some(unknown) => {
            log_warning_standalone!("Unknown command: {}", unknown);
            display_general_help();
        }
    }
    Ok(())
}

/// Display general help focused on commands (for the help command)
fn display_general_help() {
    log_version!();
    log_block_start!("Available Commands:");
    log_indented!("facts, f               Sun, moon and Chinese facts for a birth profile");
    log_indented!("sun, s <month> <day>   Sun sign for a calendar day");
    log_indented!("moon, m [instant]      Moon sign at an instant (default: now)");
    log_indented!("chinese, c <year>      Chinese animal and element for a year");
    log_indented!("help, h [COMMAND]      Show detailed help for a command");
    log_pipe!();
    log_info!("Use 'astrofacts help <command>' to see detailed help for a specific command.");
    log_indented!("Use 'astrofacts --help' to see all options and general usage.");
    log_end!();
}

/// Display help for the help command itself
fn display_help_help() {
    log_version!();
    log_block_start!("help - Display help information");
    log_block_start!("Usage: astrofacts help [COMMAND]");
    log_block_start!("Arguments:");
    log_indented!("COMMAND  Optional command to get help for");
    log_indented!("         If omitted, shows general help");
    log_block_start!("Examples:");
    log_indented!("# Show general help");
    log_indented!("astrofacts help");
    log_pipe!();
    log_indented!("# Show help for specific commands");
    log_indented!("astrofacts help facts");
    log_indented!("astrofacts help moon");
    log_end!();
}
