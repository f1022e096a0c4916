//! Error types for board operations.

use std::fmt;

use super::{Piece, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for placement updates and for placements that break the
/// board's invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// No piece of this type stands on the square
    PieceNotFound { piece: Piece, square: Square },
    /// A piece type is listed without any squares
    EmptyPieceList { piece: Piece },
    /// Two pieces claim the same square
    SquareTaken { square: Square },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::PieceNotFound { piece, square } => {
                write!(f, "No {piece} on {square}")
            }
            PlacementError::EmptyPieceList { piece } => {
                write!(f, "Piece type {piece} is listed with no squares")
            }
            PlacementError::SquareTaken { square } => {
                write!(f, "More than one piece on {square}")
            }
        }
    }
}

impl std::error::Error for PlacementError {}
