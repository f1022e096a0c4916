//! Fluent builder for constructing board positions.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Piece, Side, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 4), Side::A, Piece::King)
//!     .piece(Square(7, 4), Side::B, Piece::King)
//!     .piece(Square(1, 0), Side::A, Piece::Pawn)
//!     .build();
//! assert_eq!(board.placements(Side::A).len(), 2);
//! ```

use super::{Board, Piece, Side, Square};

/// Back rank layout from file a to file h.
const BACK_RANK: [Piece; 8] = [
    Piece::Castle,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Castle,
];

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Side, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();

        for side in Side::BOTH {
            let back = side.back_rank();
            let pawns = side.pawn_start_rank();
            for file in 0..8 {
                builder.pieces.push((Square(pawns, file), side, Piece::Pawn));
            }
            for (file, &piece) in BACK_RANK.iter().enumerate() {
                builder.pieces.push((Square(back, file), side, piece));
            }
        }
        builder
    }

    /// Place a piece on the board, replacing any previous occupant.
    #[must_use]
    pub fn piece(mut self, square: Square, side: Side, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, side, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Remove every piece of one type for one side.
    #[must_use]
    pub fn without(mut self, side: Side, piece: Piece) -> Self {
        self.pieces.retain(|&(_, s, p)| s != side || p != piece);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, side, piece) in self.pieces {
            board.set_piece(square, side, piece);
        }
        board
    }
}
