//! Command-line argument parsing for playctl.
//!
//! Flags are checked in order; the first recognised one decides the command.

use std::path::PathBuf;

use crate::input::{Action, InputCode, UNBOUND};

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print the current key configuration
    ShowKeys,
    /// Restore and persist the default key configuration
    ResetKeys,
    /// Bind one action to one input code and persist the result.
    /// With `steal`, a key held by another action is moved instead of refused.
    Bind {
        action: Action,
        code: InputCode,
        steal: bool,
    },
    /// Decode a listing message from a file and print it
    Decode { path: PathBuf },
    /// Run the interactive key monitor (default)
    Monitor,
    /// Arguments could not be parsed
    Invalid(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use playctl::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["playctl".to_string(), "--keys".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::ShowKeys);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let args: Vec<String> = args.skip(1).collect();
    let steal = args.iter().any(|arg| arg == "--steal");

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--keys" => return CliCommand::ShowKeys,
            "--reset-keys" => return CliCommand::ResetKeys,
            "--bind" => return parse_bind(args.next(), args.next(), steal),
            "--decode" => {
                return match args.next() {
                    Some(path) => CliCommand::Decode {
                        path: PathBuf::from(path),
                    },
                    None => CliCommand::Invalid("--decode needs a file".to_string()),
                }
            }
            _ => {}
        }
    }
    CliCommand::Monitor
}

fn parse_bind(action: Option<String>, code: Option<String>, steal: bool) -> CliCommand {
    let (Some(action), Some(code)) = (action, code) else {
        return CliCommand::Invalid("--bind needs <action-code> <input-code>".to_string());
    };

    let action = match action.parse::<usize>().ok().and_then(Action::from_code) {
        Some(action) => action,
        None => return CliCommand::Invalid(format!("unknown action code: {}", action)),
    };
    match code.parse::<InputCode>() {
        Ok(code) if code != UNBOUND => CliCommand::Bind {
            action,
            code,
            steal,
        },
        _ => CliCommand::Invalid(format!("invalid input code: {}", code)),
    }
}

/// Usage text for `--help`.
pub const USAGE: &str = "\
Usage: playctl [OPTION]

With no option, starts the interactive key monitor (Ctrl+C quits).

Options:
  --keys                          print the key configuration
  --reset-keys                    restore the default keys
  --bind <action-code> <code>     bind an action to an input code
  --steal                         with --bind, take the key from its holder
  --decode <file>                 decode a listing message and print it
  -V, --version                   print the version
  -h, --help                      print this help
";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let args: Vec<String> = std::iter::once("playctl")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args(args.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::Monitor);
    }

    #[test]
    fn test_parse_unknown_args_ignored() {
        assert_eq!(parse(&["--foo", "bar"]), CliCommand::Monitor);
    }

    #[test]
    fn test_parse_keys_flags() {
        assert_eq!(parse(&["--keys"]), CliCommand::ShowKeys);
        assert_eq!(parse(&["--reset-keys"]), CliCommand::ResetKeys);
    }

    #[test]
    fn test_parse_bind() {
        assert_eq!(
            parse(&["--bind", "4", "57"]),
            CliCommand::Bind {
                action: Action::VolumeUp,
                code: 57,
                steal: false
            }
        );
        assert_eq!(
            parse(&["--bind", "4", "53", "--steal"]),
            CliCommand::Bind {
                action: Action::VolumeUp,
                code: 53,
                steal: true
            }
        );
    }

    #[test]
    fn test_parse_bind_rejects_bad_values() {
        assert!(matches!(parse(&["--bind", "12", "57"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--bind", "x", "57"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--bind", "0", "0"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--bind", "0", "-3"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--bind", "0"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_decode() {
        assert_eq!(
            parse(&["--decode", "listing.bin"]),
            CliCommand::Decode {
                path: PathBuf::from("listing.bin")
            }
        );
        assert!(matches!(parse(&["--decode"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_first_flag_wins() {
        assert_eq!(parse(&["--keys", "--version"]), CliCommand::ShowKeys);
    }
}
