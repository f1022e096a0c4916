//! Game options.
//!
//! Settings arrive as `name=value` pairs, the way an engine front end
//! forwards `setoption` commands. Names are case-insensitive.

use std::str::FromStr;

use super::OptionError;

/// What happens when a choice provider answers with an invalid token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InvalidSelectionPolicy {
    /// Abort the game and report the error
    #[default]
    Terminate,
    /// Report the error and ask again at the same choice point
    Retry,
}

/// What happens when the side to move still has a king but nothing can move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StalematePolicy {
    /// End the game without a winner
    #[default]
    Draw,
    /// Abort the game with `GameError::NoLegalMoves`
    Error,
}

impl FromStr for InvalidSelectionPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminate" => Ok(InvalidSelectionPolicy::Terminate),
            "retry" => Ok(InvalidSelectionPolicy::Retry),
            _ => Err(()),
        }
    }
}

impl FromStr for StalematePolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draw" => Ok(StalematePolicy::Draw),
            "error" => Ok(StalematePolicy::Error),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameOptions {
    pub invalid_selection: InvalidSelectionPolicy,
    pub stalemate: StalematePolicy,
}

impl GameOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one named setting.
    pub fn apply_option(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        let invalid = || OptionError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        };
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "invalidselection" => {
                self.invalid_selection = value.parse().map_err(|()| invalid())?;
            }
            "stalemate" => {
                self.stalemate = value.parse().map_err(|()| invalid())?;
            }
            _ => {
                return Err(OptionError::UnknownOption {
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Apply a `name=value` setting.
    pub fn apply_setting(&mut self, setting: &str) -> Result<(), OptionError> {
        let (name, value) = setting
            .split_once('=')
            .ok_or_else(|| OptionError::Malformed {
                setting: setting.to_string(),
            })?;
        self.apply_option(name, value)
    }
}
