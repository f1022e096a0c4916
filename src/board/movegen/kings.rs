use super::super::Square;
use super::tables::KING_TARGETS;
use super::Occupancy;

/// Adjacent squares not held by an own piece. Attacked squares are not
/// filtered out.
#[must_use]
pub fn king_moves(from: Square, occ: &Occupancy) -> Vec<Square> {
    KING_TARGETS[from.as_index()]
        .iter()
        .copied()
        .filter(|&sq| !occ.own.contains(sq))
        .collect()
}
