//! Interactive console shell.
//!
//! Feeds the turn engine with choices typed on stdin (or drawn from a
//! seeded generator for self-play), prints the board between turns and
//! keeps the win tally for the session.

use std::io::{BufRead, Write};

use crate::board::Side;
use crate::game::{
    play_turn, ChoiceProvider, Game, GameError, Prompt, RandomChooser, Scoreboard, TurnReport,
};

pub mod command;
pub mod print;

pub use command::{parse_args, ArgsError, ConsoleArgs};

use print::{describe_move, describe_outcome, render_board, render_placements, render_prompt};

/// Where a console player's answers come from.
pub enum Input<R> {
    Lines(R),
    Random(RandomChooser),
}

/// A choice provider that talks through a reader and a writer.
pub struct ConsolePlayer<R, W> {
    input: Input<R>,
    out: W,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(input: Input<R>, out: W) -> Self {
        ConsolePlayer { input, out }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<R: BufRead, W: Write> ChoiceProvider for ConsolePlayer<R, W> {
    fn choose(&mut self, prompt: &Prompt) -> Option<String> {
        write!(self.out, "{}", render_prompt(prompt)).ok()?;
        self.out.flush().ok()?;
        match &mut self.input {
            Input::Lines(reader) => {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    Ok(0) | Err(_) => None,
                    Ok(_) => Some(line.trim().to_string()),
                }
            }
            Input::Random(chooser) => {
                let token = chooser.choose(prompt)?;
                writeln!(self.out, "{token}").ok()?;
                Some(token)
            }
        }
    }

    fn rejected(&mut self, error: &GameError) {
        let _ = writeln!(self.out, "{error}; choose again");
    }
}

/// Play `args.games` games, returning the final tally.
///
/// An error ends the session; under the default policy an invalid choice
/// is such an error.
pub fn run_console<R, W>(args: &ConsoleArgs, input: R, out: W) -> Result<Scoreboard, GameError>
where
    R: BufRead,
    W: Write,
{
    let input = match args.random_seed {
        Some(seed) => Input::Random(RandomChooser::new(seed)),
        None => Input::Lines(input),
    };
    let mut player = ConsolePlayer::new(input, out);
    let mut score = Scoreboard::new();

    for _ in 0..args.games {
        let mut game = Game::new(args.options);
        loop {
            show_turn(&game, player.output());
            if args.ply_limit().is_some_and(|limit| game.ply() >= limit) {
                let _ = writeln!(player.output(), "unfinished after {} plies", game.ply());
                break;
            }
            match play_turn(&mut game, &mut player)? {
                TurnReport::Moved(applied) => {
                    let _ = writeln!(player.output(), "{}\n", describe_move(&applied));
                }
                TurnReport::Finished(outcome) => {
                    if let Some(outcome) = game.take_outcome() {
                        score.record(outcome);
                    }
                    let _ = writeln!(player.output(), "{}", describe_outcome(outcome));
                    break;
                }
            }
        }
        let _ = writeln!(player.output(), "{score}");
    }
    Ok(score)
}

fn show_turn<W: Write>(game: &Game, out: &mut W) {
    let board = game.board();
    let _ = writeln!(out, "{}", render_board(board));
    for side in Side::BOTH {
        let _ = writeln!(out, "{side}: {}", render_placements(board.placements(side)));
    }
    if !game.state().is_terminal() {
        let _ = writeln!(out, "{}\n--------", game.active_side());
    }
}
