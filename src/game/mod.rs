//! Turn engine and the collaborators it talks to.
//!
//! [`Game`] is an explicit state machine: it exposes the current question
//! as a [`TurnState`] and advances when handed an answer. Input, output and
//! the win tally live outside it, behind [`ChoiceProvider`] and
//! [`Scoreboard`].
//!
//! # Example
//! ```
//! use chess_rules::game::{play_game, Game, GameOptions, RandomChooser, Scoreboard};
//!
//! let mut game = Game::new(GameOptions::default());
//! let mut player = RandomChooser::new(7);
//! let mut score = Scoreboard::new();
//! let outcome = play_game(&mut game, &mut player, &mut score);
//! assert!(outcome.is_ok());
//! ```

mod chooser;
mod driver;
mod engine;
mod error;
mod options;
mod scoreboard;

#[cfg(test)]
mod tests;

pub use chooser::{parse_choice, ChoiceProvider, Prompt, RandomChooser, ScriptedChooser};
pub use driver::{play_game, play_turn, TurnReport};
pub use engine::{AppliedMove, Game, GameEvent, Outcome, TurnState};
pub use error::{ChoicePoint, GameError, OptionError, SelectionError};
pub use options::{GameOptions, InvalidSelectionPolicy, StalematePolicy};
pub use scoreboard::Scoreboard;
