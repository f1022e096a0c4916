//! Core board types.
//!
//! - `Piece` and `Side` - piece types and the two sides
//! - `Square` - (rank, file) board coordinate
//! - `Bitboard` - 64-bit occupancy set

mod bitboard;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use piece::{Piece, Side};
pub use square::Square;
