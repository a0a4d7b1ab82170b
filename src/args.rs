//! Command-line argument parsing.
//!
//! Turns the raw argument list into a [`CliAction`]. Global flags may appear
//! anywhere; the first positional argument names the command and the rest are
//! its operands. Negative numbers (`chinese -8`) count as operands, not flags.

/// Flags shared by every calculating command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonFlags {
    pub debug_enabled: bool,
    /// Print JSON instead of the box-drawing layout.
    pub json: bool,
    pub config_dir: Option<String>,
}

/// Where the `facts` command gets its birth data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactsInput {
    /// Individual `--dob/--tob/--tz/--place` flags.
    Fields {
        dob: String,
        tob: Option<String>,
        /// `None` means the configured default zone.
        timezone: Option<String>,
        place: Option<String>,
    },
    /// A TOML profile file given with `--profile`.
    ProfileFile(String),
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Derive every fact for one birth profile
    Facts {
        common: CommonFlags,
        input: FactsInput,
    },
    /// Sun sign for a calendar day
    Sun {
        common: CommonFlags,
        month: u32,
        day: u32,
    },
    /// Moon sign at an instant (`None` = now)
    Moon {
        common: CommonFlags,
        instant: Option<String>,
    },
    /// Chinese animal and element for a year
    Chinese { common: CommonFlags, year: i32 },
    /// Help for one command, or the command overview
    Help { command: Option<String> },

    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to invalid arguments and exit with failure
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

/// Values of the options only `facts` accepts.
#[derive(Debug, Default)]
struct FactsOptions {
    dob: Option<String>,
    tob: Option<String>,
    timezone: Option<String>,
    place: Option<String>,
    profile: Option<String>,
}

impl FactsOptions {
    fn any_set(&self) -> bool {
        self.dob.is_some()
            || self.tob.is_some()
            || self.timezone.is_some()
            || self.place.is_some()
            || self.profile.is_some()
    }
}

fn is_operand(arg: &str) -> bool {
    !arg.starts_with('-') || (arg.len() > 1 && arg.parse::<i64>().is_ok())
}

/// A flag value may start with a minus sign only when a digit follows, as in
/// `--tz -05:00`.
fn is_flag_value(arg: &str) -> bool {
    match arg.strip_prefix('-') {
        Some(rest) => rest.starts_with(|c: char| c.is_ascii_digit()),
        None => true,
    }
}

fn error_action() -> ParsedArgs {
    ParsedArgs {
        action: CliAction::ShowHelpDueToError,
    }
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// The first item is the program name and is skipped.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut common = CommonFlags::default();
        let mut facts = FactsOptions::default();
        let mut display_help = false;
        let mut display_version = false;
        let mut command: Option<String> = None;
        let mut operands: Vec<String> = Vec::new();

        let mut i = 0;
        while i < args_vec.len() {
            // Accept both `--dob 1986-03-21` and `--dob=1986-03-21`
            let (flag, inline_value) = match args_vec[i].split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_string())),
                _ => (args_vec[i].as_str(), None),
            };

            match flag {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => common.debug_enabled = true,
                "--json" | "-j" => common.json = true,
                "--config" | "-c" | "--dob" | "--tob" | "--tz" | "--place" | "--profile" => {
                    let value = match inline_value {
                        Some(value) => value,
                        None => match args_vec.get(i + 1) {
                            Some(next) if is_flag_value(next) => {
                                i += 1;
                                next.clone()
                            }
                            _ => {
                                log_warning!("Missing value for {}", flag);
                                return error_action();
                            }
                        },
                    };
                    let slot = match flag {
                        "--config" | "-c" => &mut common.config_dir,
                        "--dob" => &mut facts.dob,
                        "--tob" => &mut facts.tob,
                        "--tz" => &mut facts.timezone,
                        "--place" => &mut facts.place,
                        _ => &mut facts.profile,
                    };
                    *slot = Some(value);
                }
                arg if is_operand(arg) => {
                    if command.is_none() {
                        command = Some(arg.to_string());
                    } else {
                        operands.push(arg.to_string());
                    }
                }
                unknown => {
                    log_warning!("Unknown option: {}", unknown);
                    return error_action();
                }
            }
            i += 1;
        }

        if display_version {
            return ParsedArgs {
                action: CliAction::ShowVersion,
            };
        }

        let Some(command) = command else {
            if facts.any_set() {
                log_warning!("Birth data options need the facts command");
                return error_action();
            }
            return ParsedArgs {
                action: CliAction::ShowHelp,
            };
        };

        if display_help {
            return ParsedArgs {
                action: CliAction::Help {
                    command: Some(command),
                },
            };
        }

        let is_facts = matches!(command.as_str(), "facts" | "f");
        if !is_facts && facts.any_set() {
            log_warning!("--dob, --tob, --tz, --place and --profile only apply to facts");
            return error_action();
        }

        let action = match command.as_str() {
            "facts" | "f" => parse_facts(facts, &operands, common),
            "sun" | "s" => parse_sun(&operands, common),
            "moon" | "m" => parse_moon(operands, common),
            "chinese" | "c" => parse_chinese(&operands, common),
            "help" | "h" => {
                if operands.len() > 1 {
                    log_warning!("Too many arguments. Usage: astrofacts help [COMMAND]");
                    None
                } else {
                    Some(CliAction::Help {
                        command: operands.into_iter().next(),
                    })
                }
            }
            unknown => {
                log_warning!("Unknown command: {}", unknown);
                None
            }
        };

        ParsedArgs {
            action: action.unwrap_or(CliAction::ShowHelpDueToError),
        }
    }

    /// Parse the process arguments.
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

fn parse_facts(options: FactsOptions, operands: &[String], common: CommonFlags) -> Option<CliAction> {
    if !operands.is_empty() {
        log_warning!("Unexpected argument: {}", operands[0]);
        return None;
    }

    let input = match (options.profile, options.dob) {
        (Some(path), None) => {
            if options.tob.is_some() || options.timezone.is_some() || options.place.is_some() {
                log_warning!("--profile cannot be combined with --tob, --tz or --place");
                return None;
            }
            FactsInput::ProfileFile(path)
        }
        (None, Some(dob)) => FactsInput::Fields {
            dob,
            tob: options.tob,
            timezone: options.timezone,
            place: options.place,
        },
        (Some(_), Some(_)) => {
            log_warning!("Use either --profile or --dob, not both");
            return None;
        }
        (None, None) => {
            log_warning!("Missing birth date. Usage: astrofacts facts --dob YYYY-MM-DD");
            return None;
        }
    };

    Some(CliAction::Facts { common, input })
}

fn parse_sun(operands: &[String], common: CommonFlags) -> Option<CliAction> {
    let [month, day] = operands else {
        log_warning!("Expected two arguments. Usage: astrofacts sun <month> <day>");
        return None;
    };

    match (month.parse::<u32>(), day.parse::<u32>()) {
        (Ok(month @ 1..=12), Ok(day @ 1..=31)) => Some(CliAction::Sun { common, month, day }),
        _ => {
            log_warning!(
                "Invalid date '{} {}'. Month must be 1-12 and day 1-31",
                month,
                day
            );
            None
        }
    }
}

fn parse_moon(operands: Vec<String>, common: CommonFlags) -> Option<CliAction> {
    if operands.len() > 1 {
        log_warning!("Too many arguments. Usage: astrofacts moon [INSTANT]");
        return None;
    }
    Some(CliAction::Moon {
        common,
        instant: operands.into_iter().next(),
    })
}

fn parse_chinese(operands: &[String], common: CommonFlags) -> Option<CliAction> {
    let [year] = operands else {
        log_warning!("Expected one argument. Usage: astrofacts chinese <year>");
        return None;
    };

    match year.parse::<i32>() {
        Ok(year) => Some(CliAction::Chinese { common, year }),
        Err(_) => {
            log_warning!("Invalid year: {}", year);
            None
        }
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("astrofacts [OPTIONS] <COMMAND>");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Enable detailed debug output");
    log_indented!("-j, --json             Output in JSON format");
    log_indented!("-h, --help             Print help information");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Commands:");
    log_indented!("facts, f               Sun, moon and Chinese facts for a birth profile");
    log_indented!("sun, s <month> <day>   Sun sign for a calendar day");
    log_indented!("moon, m [instant]      Moon sign at an instant (default: now)");
    log_indented!("chinese, c <year>      Chinese animal and element for a year");
    log_indented!("help, h [COMMAND]      Show detailed help for a command");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliAction {
        ParsedArgs::parse(std::iter::once("astrofacts").chain(args.iter().copied())).action
    }

    #[test]
    fn test_parse_no_args_shows_help() {
        assert_eq!(parse(&[]), CliAction::ShowHelp);
    }

    #[test]
    fn test_parse_version_takes_precedence() {
        assert_eq!(parse(&["--version"]), CliAction::ShowVersion);
        assert_eq!(parse(&["sun", "3", "21", "-V"]), CliAction::ShowVersion);
        assert_eq!(parse(&["-v", "--help"]), CliAction::ShowVersion);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["--help"]), CliAction::ShowHelp);
        assert_eq!(
            parse(&["moon", "-h"]),
            CliAction::Help {
                command: Some("moon".to_string())
            }
        );
    }

    #[test]
    fn test_parse_help_command() {
        assert_eq!(parse(&["help"]), CliAction::Help { command: None });
        assert_eq!(
            parse(&["h", "facts"]),
            CliAction::Help {
                command: Some("facts".to_string())
            }
        );
        assert_eq!(parse(&["help", "sun", "moon"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_facts_fields() {
        let action = parse(&[
            "facts",
            "--dob",
            "1986-03-21",
            "--tob",
            "00:00",
            "--tz=Asia/Singapore",
            "--place",
            "Singapore",
        ]);
        assert_eq!(
            action,
            CliAction::Facts {
                common: CommonFlags::default(),
                input: FactsInput::Fields {
                    dob: "1986-03-21".to_string(),
                    tob: Some("00:00".to_string()),
                    timezone: Some("Asia/Singapore".to_string()),
                    place: Some("Singapore".to_string()),
                },
            }
        );
    }

    #[test]
    fn test_parse_facts_global_flags_anywhere() {
        let action = parse(&["-j", "f", "--dob", "2000-01-01", "-d", "--config", "/tmp/af"]);
        assert_eq!(
            action,
            CliAction::Facts {
                common: CommonFlags {
                    debug_enabled: true,
                    json: true,
                    config_dir: Some("/tmp/af".to_string()),
                },
                input: FactsInput::Fields {
                    dob: "2000-01-01".to_string(),
                    tob: None,
                    timezone: None,
                    place: None,
                },
            }
        );
    }

    #[test]
    fn test_parse_negative_offset_values() {
        for zone in ["-05:00", "-3", "-0800"] {
            let action = parse(&["facts", "--dob", "1990-01-01", "--tz", zone]);
            assert_eq!(
                action,
                CliAction::Facts {
                    common: CommonFlags::default(),
                    input: FactsInput::Fields {
                        dob: "1990-01-01".to_string(),
                        tob: None,
                        timezone: Some(zone.to_string()),
                        place: None,
                    },
                },
                "{zone}"
            );
        }
        // A following flag is still not taken as the value
        assert_eq!(
            parse(&["facts", "--dob", "1990-01-01", "--tz", "--json"]),
            CliAction::ShowHelpDueToError
        );
    }

    #[test]
    fn test_parse_facts_profile() {
        assert_eq!(
            parse(&["facts", "--profile", "me.toml"]),
            CliAction::Facts {
                common: CommonFlags::default(),
                input: FactsInput::ProfileFile("me.toml".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_facts_errors() {
        assert_eq!(parse(&["facts"]), CliAction::ShowHelpDueToError);
        assert_eq!(parse(&["facts", "--dob"]), CliAction::ShowHelpDueToError);
        assert_eq!(
            parse(&["facts", "--profile", "a.toml", "--dob", "1990-01-01"]),
            CliAction::ShowHelpDueToError
        );
        assert_eq!(
            parse(&["facts", "--profile", "a.toml", "--tz", "UTC"]),
            CliAction::ShowHelpDueToError
        );
        assert_eq!(
            parse(&["facts", "--dob", "1990-01-01", "extra"]),
            CliAction::ShowHelpDueToError
        );
        assert_eq!(
            parse(&["--dob", "1990-01-01"]),
            CliAction::ShowHelpDueToError
        );
    }

    #[test]
    fn test_parse_sun() {
        assert_eq!(
            parse(&["sun", "3", "21"]),
            CliAction::Sun {
                common: CommonFlags::default(),
                month: 3,
                day: 21,
            }
        );
        assert_eq!(parse(&["sun", "13", "1"]), CliAction::ShowHelpDueToError);
        assert_eq!(parse(&["sun", "3", "0"]), CliAction::ShowHelpDueToError);
        assert_eq!(parse(&["sun", "3"]), CliAction::ShowHelpDueToError);
        assert_eq!(parse(&["s", "march", "21"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_moon() {
        assert_eq!(
            parse(&["moon"]),
            CliAction::Moon {
                common: CommonFlags::default(),
                instant: None,
            }
        );
        assert_eq!(
            parse(&["m", "1992-04-12T00:00:00Z", "--json"]),
            CliAction::Moon {
                common: CommonFlags {
                    json: true,
                    ..CommonFlags::default()
                },
                instant: Some("1992-04-12T00:00:00Z".to_string()),
            }
        );
        assert_eq!(parse(&["moon", "a", "b"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_chinese_accepts_negative_years() {
        assert_eq!(
            parse(&["chinese", "1986"]),
            CliAction::Chinese {
                common: CommonFlags::default(),
                year: 1986,
            }
        );
        assert_eq!(
            parse(&["c", "-8"]),
            CliAction::Chinese {
                common: CommonFlags::default(),
                year: -8,
            }
        );
        assert_eq!(parse(&["chinese"]), CliAction::ShowHelpDueToError);
        assert_eq!(parse(&["chinese", "year"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_unknown_input() {
        assert_eq!(parse(&["horoscope"]), CliAction::ShowHelpDueToError);
        assert_eq!(parse(&["sun", "3", "21", "--color"]), CliAction::ShowHelpDueToError);
        assert_eq!(
            parse(&["sun", "3", "21", "--tz", "UTC"]),
            CliAction::ShowHelpDueToError
        );
    }
}
