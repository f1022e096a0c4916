//! Piece exchange: moving a piece in place, captures and promotion.

use super::{Piece, Placements, PlacementError, Square};

/// Move the `piece` on `from` to `to`, keeping its index in the type's list.
pub fn replace_piece(
    placements: &mut Placements,
    piece: Piece,
    from: Square,
    to: Square,
) -> Result<(), PlacementError> {
    let missing = || PlacementError::PieceNotFound {
        piece,
        square: from,
    };
    let slot = placements
        .list_mut(piece)
        .and_then(|list| list.iter_mut().find(|sq| **sq == from))
        .ok_or_else(missing)?;
    *slot = to;
    Ok(())
}

/// Remove the opponent's `piece` standing on `square`.
///
/// The type entry disappears once its last piece is taken.
pub fn capture(
    opponent: &mut Placements,
    piece: Piece,
    square: Square,
) -> Result<(), PlacementError> {
    opponent.remove(piece, square)
}

/// The type a pawn promoted by this side becomes.
///
/// Without a queen the pawn becomes a queen. Otherwise the first of bishop,
/// knight and castle that is absent or down to a single piece is
/// reinstated; if all three are at full strength it becomes another queen.
#[must_use]
pub fn promotion_piece(placements: &Placements) -> Piece {
    if !placements.has(Piece::Queen) {
        return Piece::Queen;
    }
    Piece::REINSTATE_ORDER
        .into_iter()
        .find(|&piece| placements.count(piece) < 2)
        .unwrap_or(Piece::Queen)
}

/// Replace the pawn on `square` with a promoted piece, returning its type.
pub fn promote(placements: &mut Placements, square: Square) -> Result<Piece, PlacementError> {
    placements.remove(Piece::Pawn, square)?;
    let piece = promotion_piece(placements);
    placements.push(piece, square);
    Ok(piece)
}
