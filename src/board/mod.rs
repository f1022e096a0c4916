//! Board representation and move rules.
//!
//! Each side's pieces are held as a [`Placements`] map from piece type to
//! the squares it occupies. Move generation is a set of pure functions
//! over two placements; [`exchange`] applies the consequences of a move.
//!
//! # Example
//! ```
//! use chess_rules::board::{generate_moves, Board, Piece, Side, Square};
//!
//! let board = Board::new();
//! let moves = generate_moves(
//!     Piece::Knight,
//!     Side::A,
//!     Square(0, 1),
//!     board.placements(Side::A),
//!     board.placements(Side::B),
//! );
//! assert_eq!(moves.len(), 2);
//! ```

mod builder;
mod error;
pub mod exchange;
mod movegen;
mod placements;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{PlacementError, SquareError};
pub use movegen::{
    bishop_distance, bishop_moves, castle_moves, generate_moves, king_moves, knight_moves,
    movable_pieces, movable_squares, pawn_moves, piece_moves, queen_moves, Occupancy,
};
pub use placements::Placements;
pub use state::Board;
pub use types::{Bitboard, BitboardIter, Piece, Side, Square};
