//! One side's piece placements.

use std::collections::btree_map::{self, BTreeMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Bitboard, Piece, PlacementError, Square};

/// Mapping from piece type to the squares one side occupies with it.
///
/// A piece type with no squares is absent from the map, never present with
/// an empty list. Squares are pairwise distinct across all types.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "BTreeMap<Piece, Vec<Square>>",
        into = "BTreeMap<Piece, Vec<Square>>"
    )
)]
pub struct Placements {
    pieces: BTreeMap<Piece, Vec<Square>>,
}

impl Placements {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Squares held by `piece`, in placement order. Empty if none are held.
    #[must_use]
    pub fn squares(&self, piece: Piece) -> &[Square] {
        self.pieces.get(&piece).map_or(&[], Vec::as_slice)
    }

    #[inline]
    #[must_use]
    pub fn has(&self, piece: Piece) -> bool {
        self.pieces.contains_key(&piece)
    }

    /// A side with a king is still in the game.
    #[inline]
    #[must_use]
    pub fn has_king(&self) -> bool {
        self.has(Piece::King)
    }

    #[must_use]
    pub fn count(&self, piece: Piece) -> usize {
        self.squares(piece).len()
    }

    /// Total number of pieces on the board for this side.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Every occupied square, grouped by piece type in listing order.
    #[must_use]
    pub fn all_pieces(&self) -> Vec<Square> {
        self.pieces.values().flatten().copied().collect()
    }

    /// The piece type standing on `square`, if any.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.pieces
            .iter()
            .find(|(_, squares)| squares.contains(&square))
            .map(|(&piece, _)| piece)
    }

    #[must_use]
    pub fn occupancy(&self) -> Bitboard {
        self.pieces.values().flatten().copied().collect()
    }

    /// Piece types currently held, with their squares.
    pub fn iter(&self) -> btree_map::Iter<'_, Piece, Vec<Square>> {
        self.pieces.iter()
    }

    /// Append a piece, creating the type entry if needed.
    pub(crate) fn push(&mut self, piece: Piece, square: Square) {
        self.pieces.entry(piece).or_default().push(square);
    }

    /// Remove any piece on `square`, returning its type.
    pub(crate) fn remove_square(&mut self, square: Square) -> Option<Piece> {
        let piece = self.piece_at(square)?;
        self.remove(piece, square).ok()?;
        Some(piece)
    }

    pub(crate) fn list_mut(&mut self, piece: Piece) -> Option<&mut Vec<Square>> {
        self.pieces.get_mut(&piece)
    }

    /// Remove `square` from `piece`'s list, dropping the entry once empty.
    pub(crate) fn remove(&mut self, piece: Piece, square: Square) -> Result<(), PlacementError> {
        let missing = PlacementError::PieceNotFound { piece, square };
        let list = self.pieces.get_mut(&piece).ok_or(missing.clone())?;
        let pos = list.iter().position(|&sq| sq == square).ok_or(missing)?;
        list.remove(pos);
        if list.is_empty() {
            self.pieces.remove(&piece);
        }
        Ok(())
    }
}

impl TryFrom<BTreeMap<Piece, Vec<Square>>> for Placements {
    type Error = PlacementError;

    /// Accept a raw map only if no type is listed empty and no square is
    /// used twice.
    fn try_from(pieces: BTreeMap<Piece, Vec<Square>>) -> Result<Self, Self::Error> {
        let mut seen = Bitboard::EMPTY;
        for (&piece, squares) in &pieces {
            if squares.is_empty() {
                return Err(PlacementError::EmptyPieceList { piece });
            }
            for &square in squares {
                if seen.contains(square) {
                    return Err(PlacementError::SquareTaken { square });
                }
                seen.insert(square);
            }
        }
        Ok(Placements { pieces })
    }
}

impl From<Placements> for BTreeMap<Piece, Vec<Square>> {
    fn from(placements: Placements) -> Self {
        placements.pieces
    }
}

impl<'a> IntoIterator for &'a Placements {
    type Item = (&'a Piece, &'a Vec<Square>);
    type IntoIter = btree_map::Iter<'a, Piece, Vec<Square>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
