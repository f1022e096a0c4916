//! The turn state machine.
//!
//! Each turn suspends at three choice points: piece type, piece, then
//! destination. A valid move choice applies the move (placement update,
//! promotion, capture) and hands the turn to the other side in one step,
//! so callers never observe a half-applied move.

use log::{debug, info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::exchange::{capture, promote, replace_piece};
use crate::board::{generate_moves, movable_pieces, movable_squares, Board, Piece, Side, Square};

use super::chooser::{parse_choice, Prompt};
use super::{
    ChoicePoint, GameError, GameOptions, InvalidSelectionPolicy, SelectionError, StalematePolicy,
};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// This side still holds a king; the other does not.
    Win(Side),
    /// The side to move could not move anything.
    Draw,
}

impl Outcome {
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::Win(side) => Some(side),
            Outcome::Draw => None,
        }
    }
}

/// A move as it was applied to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AppliedMove {
    pub side: Side,
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub promoted: Option<Piece>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    MoveApplied(AppliedMove),
    GameOver(Outcome),
}

/// Where the game currently stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnState {
    AwaitingPieceType {
        options: Vec<Piece>,
    },
    AwaitingPiece {
        piece: Piece,
        options: Vec<Square>,
    },
    AwaitingMove {
        piece: Piece,
        from: Square,
        options: Vec<Square>,
    },
    GameOver(Outcome),
    /// Stopped by an error; no further choices are accepted.
    Aborted(GameError),
}

impl TurnState {
    #[must_use]
    pub fn choice_point(&self) -> Option<ChoicePoint> {
        match self {
            TurnState::AwaitingPieceType { .. } => Some(ChoicePoint::PieceType),
            TurnState::AwaitingPiece { .. } => Some(ChoicePoint::Piece),
            TurnState::AwaitingMove { .. } => Some(ChoicePoint::Move),
            TurnState::GameOver(_) | TurnState::Aborted(_) => None,
        }
    }

    /// Number of options offered, or `None` in a terminal state.
    #[must_use]
    pub fn option_count(&self) -> Option<usize> {
        match self {
            TurnState::AwaitingPieceType { options } => Some(options.len()),
            TurnState::AwaitingPiece { options, .. } | TurnState::AwaitingMove { options, .. } => {
                Some(options.len())
            }
            TurnState::GameOver(_) | TurnState::Aborted(_) => None,
        }
    }

    #[must_use]
    pub fn option_labels(&self) -> Vec<String> {
        match self {
            TurnState::AwaitingPieceType { options } => {
                options.iter().map(ToString::to_string).collect()
            }
            TurnState::AwaitingPiece { options, .. } | TurnState::AwaitingMove { options, .. } => {
                options.iter().map(ToString::to_string).collect()
            }
            TurnState::GameOver(_) | TurnState::Aborted(_) => Vec::new(),
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.choice_point().is_none()
    }
}

/// The option picked at the current choice point.
enum Selected {
    PieceType(Piece),
    Piece(Piece, Square),
    Move(Piece, Square, Square),
}

/// One game between side A and side B. Side A moves first.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    active: Side,
    state: TurnState,
    options: GameOptions,
    ply: u32,
    /// Set once the outcome has been handed to a scoreboard.
    recorded: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameOptions::default())
    }
}

impl Game {
    /// A game from the standard starting position.
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        Self::from_board(Board::new(), Side::A, options)
    }

    /// A game from an arbitrary position with `to_move` to play.
    ///
    /// The position is checked immediately: a side without a king has
    /// already lost.
    #[must_use]
    pub fn from_board(board: Board, to_move: Side, options: GameOptions) -> Self {
        let mut game = Game {
            board,
            active: to_move,
            state: TurnState::AwaitingPieceType {
                options: Vec::new(),
            },
            options,
            ply: 0,
            recorded: false,
        };
        game.begin_turn();
        game
    }

    /// Read-only view of both sides' placements.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &TurnState {
        &self.state
    }

    /// The side whose turn it is.
    #[inline]
    #[must_use]
    pub fn active_side(&self) -> Side {
        self.active
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Moves applied so far.
    #[inline]
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            TurnState::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Hand over the outcome for crediting. Returns `Some` exactly once per
    /// finished game, `None` before the end and on every later call.
    pub fn take_outcome(&mut self) -> Option<Outcome> {
        let outcome = self.outcome().filter(|_| !self.recorded)?;
        self.recorded = true;
        Some(outcome)
    }

    /// Stop the game with `err`. A game that is already over keeps its state.
    pub fn abort(&mut self, err: GameError) {
        if !self.state.is_terminal() {
            warn!("{} aborts the game: {err}", self.active);
            self.state = TurnState::Aborted(err);
        }
    }

    /// The question a choice provider must answer next.
    #[must_use]
    pub fn prompt(&self) -> Option<Prompt> {
        let point = self.state.choice_point()?;
        Some(Prompt {
            side: self.active,
            point,
            labels: self.state.option_labels(),
        })
    }

    /// Validate a raw token from a choice provider and apply it.
    pub fn choose_token(&mut self, token: &str) -> Result<Vec<GameEvent>, GameError> {
        let (point, count) = self.awaiting()?;
        match parse_choice(token, count) {
            Ok(index) => self.choose(index),
            Err(error) => Err(self.reject(GameError::InvalidSelection { point, error })),
        }
    }

    /// Pick option `index` at the current choice point.
    ///
    /// Returns the events produced: nothing until the move itself is
    /// chosen, then the applied move and, if it ended the game, the outcome.
    pub fn choose(&mut self, index: usize) -> Result<Vec<GameEvent>, GameError> {
        let (point, count) = self.awaiting()?;
        let selected = match &self.state {
            TurnState::AwaitingPieceType { options } => {
                options.get(index).map(|&piece| Selected::PieceType(piece))
            }
            TurnState::AwaitingPiece { piece, options } => {
                options.get(index).map(|&from| Selected::Piece(*piece, from))
            }
            TurnState::AwaitingMove {
                piece,
                from,
                options,
            } => options.get(index).map(|&to| Selected::Move(*piece, *from, to)),
            TurnState::GameOver(_) | TurnState::Aborted(_) => return Err(GameError::GameFinished),
        };
        let Some(selected) = selected else {
            let error = SelectionError::OutOfRange { index, count };
            return Err(self.reject(GameError::InvalidSelection { point, error }));
        };

        let (own, opponent) = (
            self.board.placements(self.active),
            self.board.placements(self.active.opponent()),
        );
        match selected {
            Selected::PieceType(piece) => {
                let options = movable_squares(piece, self.active, own, opponent);
                self.state = TurnState::AwaitingPiece { piece, options };
                Ok(Vec::new())
            }
            Selected::Piece(piece, from) => {
                let options = generate_moves(piece, self.active, from, own, opponent);
                self.state = TurnState::AwaitingMove {
                    piece,
                    from,
                    options,
                };
                Ok(Vec::new())
            }
            Selected::Move(piece, from, to) => {
                let applied = self.apply(piece, from, to)?;
                let mut events = vec![GameEvent::MoveApplied(applied)];
                self.next_turn();
                if let TurnState::GameOver(outcome) = self.state {
                    events.push(GameEvent::GameOver(outcome));
                }
                Ok(events)
            }
        }
    }

    /// Choice point and option count, or an error once the game is over.
    fn awaiting(&self) -> Result<(ChoicePoint, usize), GameError> {
        match (self.state.choice_point(), self.state.option_count()) {
            (Some(point), Some(count)) => Ok((point, count)),
            _ => Err(GameError::GameFinished),
        }
    }

    /// Record a rejected choice according to the configured policy.
    fn reject(&mut self, err: GameError) -> GameError {
        match self.options.invalid_selection {
            InvalidSelectionPolicy::Terminate => self.abort(err.clone()),
            InvalidSelectionPolicy::Retry => {
                debug!("{} must choose again: {err}", self.active);
            }
        }
        err
    }

    /// Move, promote and capture on a scratch copy, then commit.
    fn apply(&mut self, piece: Piece, from: Square, to: Square) -> Result<AppliedMove, GameError> {
        let side = self.active;
        let mut board = self.board.clone();
        let (own, opponent) = board.split_mut(side);

        let captured = opponent.piece_at(to);
        replace_piece(own, piece, from, to)?;

        let promoted = if piece == Piece::Pawn && (to.rank() == 0 || to.rank() == 7) {
            Some(promote(own, to)?)
        } else {
            None
        };

        if let Some(victim) = captured {
            capture(opponent, victim, to)?;
        }

        self.board = board;
        let applied = AppliedMove {
            side,
            piece,
            from,
            to,
            captured,
            promoted,
        };
        debug!(
            "{side}: {piece} {from} -> {to}{}{}",
            captured.map(|p| format!(" takes {p}")).unwrap_or_default(),
            promoted.map(|p| format!(" promotes to {p}")).unwrap_or_default(),
        );
        Ok(applied)
    }

    fn next_turn(&mut self) {
        self.ply += 1;
        self.active = self.active.opponent();
        self.begin_turn();
    }

    /// Enter a turn for the active side, or end the game.
    fn begin_turn(&mut self) {
        for side in [self.active, self.active.opponent()] {
            if !self.board.placements(side).has_king() {
                let outcome = Outcome::Win(side.opponent());
                info!("{} wins after {} plies", side.opponent(), self.ply);
                self.state = TurnState::GameOver(outcome);
                return;
            }
        }

        let options = movable_pieces(
            self.active,
            self.board.placements(self.active),
            self.board.placements(self.active.opponent()),
        );
        if !options.is_empty() {
            self.state = TurnState::AwaitingPieceType { options };
            return;
        }

        self.state = match self.options.stalemate {
            StalematePolicy::Draw => {
                info!("{} cannot move; game drawn after {} plies", self.active, self.ply);
                TurnState::GameOver(Outcome::Draw)
            }
            StalematePolicy::Error => {
                warn!("{} cannot move", self.active);
                TurnState::Aborted(GameError::NoLegalMoves { side: self.active })
            }
        };
    }
}
