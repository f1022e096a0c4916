//! Candidate destination squares for each piece type.
//!
//! Every generator is a pure function of the piece's square and the two
//! sides' occupancy. Nothing is cached between calls: callers rebuild an
//! [`Occupancy`] from the current placements each time they ask.
//!
//! No piece ever lists a square held by its own side. Attacked squares,
//! check, castling and en passant are not considered.

mod kings;
mod knights;
mod pawns;
mod sliders;
mod tables;

pub use kings::king_moves;
pub use knights::knight_moves;
pub use pawns::pawn_moves;
pub use sliders::{bishop_moves, castle_moves, queen_moves};

use super::{Bitboard, Piece, Placements, Side, Square};

/// Occupied squares split by owner, from the moving side's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occupancy {
    pub own: Bitboard,
    pub opponent: Bitboard,
}

impl Occupancy {
    #[must_use]
    pub fn new(own: &Placements, opponent: &Placements) -> Self {
        Occupancy {
            own: own.occupancy(),
            opponent: opponent.occupancy(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_occupied(&self, sq: Square) -> bool {
        self.own.contains(sq) || self.opponent.contains(sq)
    }
}

/// Destinations for a `piece` of `side` standing on `from`.
#[must_use]
pub fn generate_moves(
    piece: Piece,
    side: Side,
    from: Square,
    own: &Placements,
    opponent: &Placements,
) -> Vec<Square> {
    piece_moves(piece, side, from, &Occupancy::new(own, opponent))
}

/// Dispatch on piece type against a prebuilt occupancy.
#[must_use]
pub fn piece_moves(piece: Piece, side: Side, from: Square, occ: &Occupancy) -> Vec<Square> {
    match piece {
        Piece::King => king_moves(from, occ),
        Piece::Queen => queen_moves(from, occ),
        Piece::Bishop => bishop_moves(from, occ),
        Piece::Knight => knight_moves(from, occ),
        Piece::Castle => castle_moves(from, occ),
        Piece::Pawn => pawn_moves(side, from, occ),
    }
}

/// Squares of `piece` that have at least one destination, in placement order.
#[must_use]
pub fn movable_squares(
    piece: Piece,
    side: Side,
    own: &Placements,
    opponent: &Placements,
) -> Vec<Square> {
    let occ = Occupancy::new(own, opponent);
    own.squares(piece)
        .iter()
        .copied()
        .filter(|&sq| !piece_moves(piece, side, sq, &occ).is_empty())
        .collect()
}

/// Piece types with at least one piece that can move, in listing order.
#[must_use]
pub fn movable_pieces(side: Side, own: &Placements, opponent: &Placements) -> Vec<Piece> {
    let occ = Occupancy::new(own, opponent);
    own.iter()
        .filter(|(&piece, squares)| {
            squares
                .iter()
                .any(|&sq| !piece_moves(piece, side, sq, &occ).is_empty())
        })
        .map(|(&piece, _)| piece)
        .collect()
}

/// Number of diagonal steps from `start` to `end`, or 0 if they do not
/// share a diagonal (or are the same square).
#[must_use]
pub fn bishop_distance(start: Square, end: Square) -> usize {
    let files = start.file().abs_diff(end.file());
    let ranks = start.rank().abs_diff(end.rank());
    if files == ranks {
        files
    } else {
        0
    }
}
