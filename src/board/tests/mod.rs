//! Board module tests.
//!
//! - `movegen.rs` - destination squares per piece type
//! - `exchange.rs` - replace, capture and promotion
//! - `proptest.rs` - property-based tests over random games


use crate::board::Square;

/// Parse algebraic notation in tests.
pub(super) fn sq(notation: &str) -> Square {
    notation.parse().unwrap()
}

pub(super) fn squares(list: &[&str]) -> Vec<Square> {
    list.iter().map(|s| sq(s)).collect()
}

/// Sorted copy, for comparing move sets where order is not under test.
pub(super) fn sorted(mut moves: Vec<Square>) -> Vec<Square> {
    moves.sort();
    moves
}
