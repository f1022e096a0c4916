//! Square type and coordinate helpers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// File letters in board order.
pub(crate) const FILES: &[u8; 8] = b"abcdefgh";

/// A square on the board, represented as (rank, file), both zero-based.
///
/// `Square(0, 0)` is a1 and `Square(7, 7)` is h8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(usize, usize)"))]
pub struct Square(pub usize, pub usize); // (rank, file)

impl Square {
    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// The file letter, `'a'..='h'`.
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        FILES[self.1] as char
    }

    /// Step `d_file` files and `d_rank` ranks away from this square.
    ///
    /// Returns `None` when the target falls off the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_file: isize, d_rank: isize) -> Option<Square> {
        let rank = self.0 as isize + d_rank;
        let file = self.1 as isize + d_file;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square(rank as usize, file as usize))
        } else {
            None
        }
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.0 + 1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let file = match f {
            'a'..='h' => f as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let rank = match r {
            '1'..='8' => r as usize - '1' as usize,
            _ => return Err(invalid()),
        };

        Ok(Square(rank, file))
    }
}
