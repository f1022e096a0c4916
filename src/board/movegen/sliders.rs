use super::super::Square;
use super::Occupancy;

/// Straight rays as (file, rank) steps: toward file a, toward file h,
/// toward rank 1, toward rank 8.
pub(crate) const STRAIGHT: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal rays as (file, rank) steps.
pub(crate) const DIAGONAL: [(isize, isize); 4] = [(-1, 1), (-1, -1), (1, 1), (1, -1)];

/// Walk each ray until blocked. An own piece ends the ray before its
/// square, an opponent piece ends it on its square.
fn slide(from: Square, rays: &[(isize, isize)], occ: &Occupancy, moves: &mut Vec<Square>) {
    for &(df, dr) in rays {
        let mut current = from;
        while let Some(sq) = current.offset(df, dr) {
            if occ.own.contains(sq) {
                break;
            }
            moves.push(sq);
            if occ.opponent.contains(sq) {
                break;
            }
            current = sq;
        }
    }
}

#[must_use]
pub fn castle_moves(from: Square, occ: &Occupancy) -> Vec<Square> {
    let mut moves = Vec::with_capacity(14);
    slide(from, &STRAIGHT, occ, &mut moves);
    moves
}

#[must_use]
pub fn bishop_moves(from: Square, occ: &Occupancy) -> Vec<Square> {
    let mut moves = Vec::with_capacity(13);
    slide(from, &DIAGONAL, occ, &mut moves);
    moves
}

/// Bishop moves followed by castle moves.
#[must_use]
pub fn queen_moves(from: Square, occ: &Occupancy) -> Vec<Square> {
    let mut moves = Vec::with_capacity(27);
    slide(from, &DIAGONAL, occ, &mut moves);
    slide(from, &STRAIGHT, occ, &mut moves);
    moves
}
