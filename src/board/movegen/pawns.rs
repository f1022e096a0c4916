use super::super::{Side, Square};
use super::Occupancy;

/// Pawn destinations for `side`.
///
/// Straight steps go only to empty squares: two from the starting rank,
/// one otherwise, stopping at the first occupied square. Diagonal steps
/// forward are available only onto opponent pieces.
#[must_use]
pub fn pawn_moves(side: Side, from: Square, occ: &Occupancy) -> Vec<Square> {
    let dir = side.pawn_direction();
    let steps = if from.rank() == side.pawn_start_rank() { 2 } else { 1 };
    let mut moves = Vec::with_capacity(4);

    let mut current = from;
    for _ in 0..steps {
        match current.offset(0, dir) {
            Some(sq) if !occ.is_occupied(sq) => {
                moves.push(sq);
                current = sq;
            }
            _ => break,
        }
    }

    for d_file in [-1, 1] {
        if let Some(sq) = from.offset(d_file, dir) {
            if occ.opponent.contains(sq) {
                moves.push(sq);
            }
        }
    }
    moves
}
