use super::super::Square;
use super::tables::KNIGHT_TARGETS;
use super::Occupancy;

/// Knight jumps that do not land on an own piece.
#[must_use]
pub fn knight_moves(from: Square, occ: &Occupancy) -> Vec<Square> {
    KNIGHT_TARGETS[from.as_index()]
        .iter()
        .copied()
        .filter(|&sq| !occ.own.contains(sq))
        .collect()
}
