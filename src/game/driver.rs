//! Running turns and whole games against a choice provider.

use super::{
    AppliedMove, ChoiceProvider, Game, GameError, GameEvent, InvalidSelectionPolicy, Outcome,
    Scoreboard, TurnState,
};

/// What one call to [`play_turn`] achieved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnReport {
    Moved(AppliedMove),
    Finished(Outcome),
}

/// Ask `provider` for the three choices of one turn and apply the move.
///
/// On a finished game this reports the outcome without touching the board.
/// Rejected answers are retried only under `InvalidSelectionPolicy::Retry`.
pub fn play_turn<P>(game: &mut Game, provider: &mut P) -> Result<TurnReport, GameError>
where
    P: ChoiceProvider + ?Sized,
{
    loop {
        match game.state() {
            TurnState::GameOver(outcome) => return Ok(TurnReport::Finished(*outcome)),
            TurnState::Aborted(err) => return Err(err.clone()),
            _ => {}
        }
        let prompt = game.prompt().ok_or(GameError::GameFinished)?;
        let Some(token) = provider.choose(&prompt) else {
            let err = GameError::MissingInput {
                point: prompt.point,
            };
            if game.options().invalid_selection == InvalidSelectionPolicy::Terminate {
                game.abort(err.clone());
            }
            return Err(err);
        };

        match game.choose_token(&token) {
            Ok(events) => {
                let applied = events.into_iter().find_map(|event| match event {
                    GameEvent::MoveApplied(applied) => Some(applied),
                    GameEvent::GameOver(_) => None,
                });
                if let Some(applied) = applied {
                    return Ok(TurnReport::Moved(applied));
                }
            }
            Err(err @ GameError::InvalidSelection { .. })
                if game.options().invalid_selection == InvalidSelectionPolicy::Retry =>
            {
                provider.rejected(&err);
            }
            Err(err) => return Err(err),
        }
    }
}

/// Play until the game ends and credit the winner on `scoreboard`.
///
/// A game is credited only once, however often it is played out again.
pub fn play_game<P>(
    game: &mut Game,
    provider: &mut P,
    scoreboard: &mut Scoreboard,
) -> Result<Outcome, GameError>
where
    P: ChoiceProvider + ?Sized,
{
    loop {
        if let TurnReport::Finished(outcome) = play_turn(game, provider)? {
            if let Some(outcome) = game.take_outcome() {
                scoreboard.record(outcome);
            }
            return Ok(outcome);
        }
    }
}
