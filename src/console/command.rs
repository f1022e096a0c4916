//! Command-line arguments for the console binary.

use std::fmt;

use crate::game::{GameOptions, OptionError};

/// Ply limit applied to self-play when none is given.
pub const DEFAULT_RANDOM_MAX_PLIES: u32 = 2000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleArgs {
    pub options: GameOptions,
    /// Number of games to play in this session
    pub games: u32,
    /// Seed for self-play; `None` reads choices from stdin
    pub random_seed: Option<u64>,
    /// Stop a game unfinished after this many plies
    pub max_plies: Option<u32>,
}

impl Default for ConsoleArgs {
    fn default() -> Self {
        ConsoleArgs {
            options: GameOptions::default(),
            games: 1,
            random_seed: None,
            max_plies: None,
        }
    }
}

impl ConsoleArgs {
    /// The ply limit in effect, including the self-play default.
    #[must_use]
    pub fn ply_limit(&self) -> Option<u32> {
        self.max_plies
            .or_else(|| self.random_seed.map(|_| DEFAULT_RANDOM_MAX_PLIES))
    }
}

/// Error type for command-line parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// Flag given without its value
    MissingValue { flag: String },
    /// Flag value is not a valid number
    InvalidNumber { flag: String, value: String },
    /// Unrecognized flag
    UnknownFlag { flag: String },
    /// `--option` setting rejected
    Option(OptionError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} needs a value"),
            ArgsError::InvalidNumber { flag, value } => {
                write!(f, "Invalid number '{value}' for {flag}")
            }
            ArgsError::UnknownFlag { flag } => write!(f, "Unknown argument '{flag}'"),
            ArgsError::Option(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<OptionError> for ArgsError {
    fn from(e: OptionError) -> Self {
        ArgsError::Option(e)
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<&str>) -> Result<T, ArgsError> {
    let value = value.ok_or_else(|| ArgsError::MissingValue {
        flag: flag.to_string(),
    })?;
    value.parse().map_err(|_| ArgsError::InvalidNumber {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

/// Parse arguments (without the program name).
///
/// Accepts `--games N`, `--random SEED`, `--max-plies N` and
/// `--option name=value` (repeatable).
pub fn parse_args<I, S>(args: I) -> Result<ConsoleArgs, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    let mut parsed = ConsoleArgs::default();
    let mut i = 0;

    while i < args.len() {
        let flag = args[i].as_ref();
        let value: Option<&str> = args.get(i + 1).map(AsRef::as_ref);
        match flag {
            "--games" => parsed.games = parse_number(flag, value)?,
            "--random" => parsed.random_seed = Some(parse_number(flag, value)?),
            "--max-plies" => parsed.max_plies = Some(parse_number(flag, value)?),
            "--option" => {
                let setting = value.ok_or_else(|| ArgsError::MissingValue {
                    flag: flag.to_string(),
                })?;
                parsed.options.apply_setting(setting)?;
            }
            _ => {
                return Err(ArgsError::UnknownFlag {
                    flag: flag.to_string(),
                })
            }
        }
        i += 2;
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{InvalidSelectionPolicy, StalematePolicy};

    #[test]
    fn test_defaults() {
        let args = parse_args(Vec::<String>::new()).unwrap();
        assert_eq!(args, ConsoleArgs::default());
        assert_eq!(args.ply_limit(), None);
    }

    #[test]
    fn test_all_flags() {
        let args = parse_args([
            "--games",
            "3",
            "--random",
            "42",
            "--option",
            "invalid_selection=retry",
            "--option",
            "stalemate=error",
        ])
        .unwrap();
        assert_eq!(args.games, 3);
        assert_eq!(args.random_seed, Some(42));
        assert_eq!(args.ply_limit(), Some(DEFAULT_RANDOM_MAX_PLIES));
        assert_eq!(args.options.invalid_selection, InvalidSelectionPolicy::Retry);
        assert_eq!(args.options.stalemate, StalematePolicy::Error);

        let args = parse_args(["--random", "1", "--max-plies", "10"]).unwrap();
        assert_eq!(args.ply_limit(), Some(10));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_args(["--games"]),
            Err(ArgsError::MissingValue {
                flag: "--games".to_string()
            })
        );
        assert!(matches!(
            parse_args(["--games", "many"]),
            Err(ArgsError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_args(["--fast"]),
            Err(ArgsError::UnknownFlag { .. })
        ));
        assert!(matches!(
            parse_args(["--option", "colour=blue"]),
            Err(ArgsError::Option(OptionError::UnknownOption { .. }))
        ));
    }
}
