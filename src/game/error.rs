//! Error types for the turn engine.

use std::fmt;

use crate::board::{PlacementError, Side};

/// One of the three points in a turn where a choice is made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChoicePoint {
    PieceType,
    Piece,
    Move,
}

impl fmt::Display for ChoicePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoicePoint::PieceType => write!(f, "piece type"),
            ChoicePoint::Piece => write!(f, "piece"),
            ChoicePoint::Move => write!(f, "move"),
        }
    }
}

/// A choice token that does not name one of the offered options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Token is not an integer
    NotANumber { token: String },
    /// Token is a negative integer
    Negative { token: String },
    /// Index is not below the option count
    OutOfRange { index: usize, count: usize },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::NotANumber { token } => {
                write!(f, "'{token}' is not part of the options")
            }
            SelectionError::Negative { token } => {
                write!(f, "'{token}' is negative")
            }
            SelectionError::OutOfRange { index, count } => {
                write!(f, "{index} is not part of the options (0-{})", count.saturating_sub(1))
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// Error type for game option parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// No option with this name
    UnknownOption { name: String },
    /// Value not accepted by the option
    InvalidValue { name: String, value: String },
    /// Setting is not of the form `name=value`
    Malformed { setting: String },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            OptionError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
            OptionError::Malformed { setting } => {
                write!(f, "Expected name=value, found '{setting}'")
            }
        }
    }
}

impl std::error::Error for OptionError {}

/// Errors reported by the turn engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The chosen index does not name an offered option
    InvalidSelection {
        point: ChoicePoint,
        error: SelectionError,
    },
    /// The choice provider gave no answer
    MissingInput { point: ChoicePoint },
    /// The side to move holds a king but nothing can move
    NoLegalMoves { side: Side },
    /// The game is over or was aborted; no further choices are accepted
    GameFinished,
    /// Placements disagree with the move being applied
    Placement(PlacementError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidSelection { point, error } => {
                write!(f, "Invalid {point} selection: {error}")
            }
            GameError::MissingInput { point } => write!(f, "No {point} selection given"),
            GameError::NoLegalMoves { side } => write!(f, "{side} has no legal moves"),
            GameError::GameFinished => write!(f, "Game is already finished"),
            GameError::Placement(e) => write!(f, "Board error: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::InvalidSelection { error, .. } => Some(error),
            GameError::Placement(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PlacementError> for GameError {
    fn from(e: PlacementError) -> Self {
        GameError::Placement(e)
    }
}
