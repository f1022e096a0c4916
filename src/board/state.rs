//! Board state: both sides' placements.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::builder::BoardBuilder;
use super::{Piece, PlacementError, Placements, Side, Square};

/// Both sides' piece placements. This is the only mutable game data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBoard"))]
pub struct Board {
    pub(crate) sides: [Placements; 2],
}

/// Unchecked wire form of a [`Board`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawBoard {
    sides: [Placements; 2],
}

#[cfg(feature = "serde")]
impl TryFrom<RawBoard> for Board {
    type Error = PlacementError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::try_from(raw.sides)
    }
}

impl TryFrom<[Placements; 2]> for Board {
    type Error = PlacementError;

    /// Join two sides' placements; no square may be held by both.
    fn try_from(sides: [Placements; 2]) -> Result<Self, Self::Error> {
        let shared = sides[0].occupancy().and(sides[1].occupancy());
        match shared.iter().next() {
            Some(square) => Err(PlacementError::SquareTaken { square }),
            None => Ok(Board { sides }),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder::starting_position().build()
    }

    /// A board with no pieces on it.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            sides: [Placements::new(), Placements::new()],
        }
    }

    #[inline]
    #[must_use]
    pub fn placements(&self, side: Side) -> &Placements {
        &self.sides[side.index()]
    }

    #[inline]
    pub(crate) fn placements_mut(&mut self, side: Side) -> &mut Placements {
        &mut self.sides[side.index()]
    }

    /// Mutable access to `side`'s placements and its opponent's at once.
    pub(crate) fn split_mut(&mut self, side: Side) -> (&mut Placements, &mut Placements) {
        let [a, b] = &mut self.sides;
        match side {
            Side::A => (a, b),
            Side::B => (b, a),
        }
    }

    /// The side and piece type on `square`, if occupied.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Side, Piece)> {
        Side::BOTH.into_iter().find_map(|side| {
            self.placements(side)
                .piece_at(square)
                .map(|piece| (side, piece))
        })
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Place a piece, replacing whatever stood on the square before.
    pub(crate) fn set_piece(&mut self, square: Square, side: Side, piece: Piece) {
        self.clear(square);
        self.placements_mut(side).push(piece, square);
    }

    pub(crate) fn clear(&mut self, square: Square) {
        for placements in &mut self.sides {
            placements.remove_square(square);
        }
    }
}
