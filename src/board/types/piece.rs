//! Piece and side types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece types.
///
/// The derived ordering is the order in which a side's piece types are
/// listed and offered for selection.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Piece {
    King,
    Queen,
    Bishop,
    Knight,
    /// The rook.
    Castle,
    Pawn,
}

impl Piece {
    /// All piece types in listing order
    pub const ALL: [Piece; 6] = [
        Piece::King,
        Piece::Queen,
        Piece::Bishop,
        Piece::Knight,
        Piece::Castle,
        Piece::Pawn,
    ];

    /// Types a promoted pawn may become once a queen is already held,
    /// highest priority first.
    pub(crate) const REINSTATE_ORDER: [Piece; 3] = [Piece::Bishop, Piece::Knight, Piece::Castle];

    /// Parse a piece from a character (k, q, b, n, c or r, p)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'k' => Some(Piece::King),
            'q' => Some(Piece::Queen),
            'b' => Some(Piece::Bishop),
            'n' => Some(Piece::Knight),
            'c' | 'r' => Some(Piece::Castle),
            'p' => Some(Piece::Pawn),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::King => 'k',
            Piece::Queen => 'q',
            Piece::Bishop => 'b',
            Piece::Knight => 'n',
            Piece::Castle => 'c',
            Piece::Pawn => 'p',
        }
    }

    /// Lowercase name of the piece type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Piece::King => "king",
            Piece::Queen => "queen",
            Piece::Bishop => "bishop",
            Piece::Knight => "knight",
            Piece::Castle => "castle",
            Piece::Pawn => "pawn",
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The two sides of a game. Side A starts on ranks 1-2 and moves first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Both sides in index order (A=0, B=1)
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }

    /// Returns the opposite side
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Back rank for this side (0 for A, 7 for B)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 7,
        }
    }

    /// Pawn forward direction (+1 for A, -1 for B)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Side::A => 1,
            Side::B => -1,
        }
    }

    /// Pawn starting rank (1 for A, 6 for B)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> usize {
        match self {
            Side::A => 1,
            Side::B => 6,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "player A"),
            Side::B => write!(f, "player B"),
        }
    }
}
