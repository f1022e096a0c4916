pub mod board;
pub mod console;
pub mod game;

pub use board::{Board, Piece, Placements, Side, Square};
pub use game::{Game, GameOptions, Outcome, Scoreboard, TurnState};
