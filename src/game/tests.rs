//! Turn engine tests.

use crate::board::{queen_moves, Board, BoardBuilder, Occupancy, Piece, Side, Square};

use super::*;

fn sq(notation: &str) -> Square {
    notation.parse().unwrap()
}

/// Choose by label rather than index.
fn pick(game: &mut Game, label: &str) -> Vec<GameEvent> {
    let labels = game.state().option_labels();
    let index = labels
        .iter()
        .position(|l| l == label)
        .unwrap_or_else(|| panic!("{label} not offered in {labels:?}"));
    game.choose(index).unwrap()
}

fn play(game: &mut Game, piece: &str, from: &str, to: &str) -> Vec<GameEvent> {
    assert!(pick(game, piece).is_empty());
    assert!(pick(game, from).is_empty());
    pick(game, to)
}

fn frozen_side_a() -> Board {
    // king boxed in by its own pawns, none of which can advance
    let mut builder = BoardBuilder::new()
        .piece(sq("a1"), Side::A, Piece::King)
        .piece(sq("h8"), Side::B, Piece::King);
    for rank in 1..=8 {
        if rank > 1 {
            builder = builder.piece(sq(&format!("a{rank}")), Side::A, Piece::Pawn);
        }
        builder = builder.piece(sq(&format!("b{rank}")), Side::A, Piece::Pawn);
    }
    builder.build()
}

#[test]
fn test_new_game_offers_knights_and_pawns() {
    let game = Game::default();
    assert_eq!(game.active_side(), Side::A);
    assert_eq!(
        game.state(),
        &TurnState::AwaitingPieceType {
            options: vec![Piece::Knight, Piece::Pawn]
        }
    );
    assert_eq!(game.state().option_labels(), vec!["knight", "pawn"]);
    let prompt = game.prompt().unwrap();
    assert_eq!(prompt.point, ChoicePoint::PieceType);
    assert_eq!(prompt.side, Side::A);
}

#[test]
fn test_turn_walks_through_three_choices() {
    let mut game = Game::default();

    assert!(game.choose(1).unwrap().is_empty());
    match game.state() {
        TurnState::AwaitingPiece { piece, options } => {
            assert_eq!(*piece, Piece::Pawn);
            assert_eq!(options.len(), 8);
            assert_eq!(options[4], sq("e2"));
        }
        other => panic!("unexpected state {other:?}"),
    }

    assert!(game.choose(4).unwrap().is_empty());
    assert_eq!(
        game.state(),
        &TurnState::AwaitingMove {
            piece: Piece::Pawn,
            from: sq("e2"),
            options: vec![sq("e3"), sq("e4")],
        }
    );

    let events = game.choose(1).unwrap();
    assert_eq!(
        events,
        vec![GameEvent::MoveApplied(AppliedMove {
            side: Side::A,
            piece: Piece::Pawn,
            from: sq("e2"),
            to: sq("e4"),
            captured: None,
            promoted: None,
        })]
    );
    assert_eq!(game.active_side(), Side::B);
    assert_eq!(game.ply(), 1);
    assert_eq!(game.board().piece_at(sq("e4")), Some((Side::A, Piece::Pawn)));
    assert!(game.board().is_empty(sq("e2")));
}

#[test]
fn test_invalid_selection_terminates_by_default() {
    let mut game = Game::default();
    let before = game.board().clone();

    let err = game.choose(2).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidSelection {
            point: ChoicePoint::PieceType,
            error: SelectionError::OutOfRange { index: 2, count: 2 },
        }
    );
    assert_eq!(game.state(), &TurnState::Aborted(err));
    assert_eq!(game.board(), &before);
    assert_eq!(game.choose(0), Err(GameError::GameFinished));
    assert!(game.prompt().is_none());
}

#[test]
fn test_invalid_token_mid_turn_leaves_board_alone() {
    let mut game = Game::default();
    let before = game.board().clone();
    game.choose(1).unwrap();
    game.choose(0).unwrap();

    let err = game.choose_token("abc").unwrap_err();
    assert!(matches!(
        err,
        GameError::InvalidSelection {
            point: ChoicePoint::Move,
            error: SelectionError::NotANumber { .. }
        }
    ));
    assert_eq!(game.board(), &before);
    assert!(game.state().is_terminal());
}

#[test]
fn test_retry_policy_keeps_state() {
    let options = GameOptions {
        invalid_selection: InvalidSelectionPolicy::Retry,
        ..GameOptions::default()
    };
    let mut game = Game::new(options);
    let state = game.state().clone();

    assert!(game.choose_token("-3").is_err());
    assert!(game.choose_token("7").is_err());
    assert_eq!(game.state(), &state);
    assert!(game.choose_token("0").is_ok());
}

#[test]
fn test_capture_removes_opponent_piece() {
    let board = BoardBuilder::new()
        .piece(sq("a1"), Side::A, Piece::Castle)
        .piece(sq("e1"), Side::A, Piece::King)
        .piece(sq("a5"), Side::B, Piece::Pawn)
        .piece(sq("e8"), Side::B, Piece::King)
        .build();
    let mut game = Game::from_board(board, Side::A, GameOptions::default());

    let events = play(&mut game, "castle", "a1", "a5");
    assert_eq!(
        events,
        vec![GameEvent::MoveApplied(AppliedMove {
            side: Side::A,
            piece: Piece::Castle,
            from: sq("a1"),
            to: sq("a5"),
            captured: Some(Piece::Pawn),
            promoted: None,
        })]
    );
    let b = game.board().placements(Side::B);
    assert!(!b.has(Piece::Pawn));
    assert_eq!(b.len(), 1);
    assert_eq!(game.active_side(), Side::B);
}

#[test]
fn test_taking_the_king_ends_the_game() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Side::A, Piece::King)
        .piece(sq("d4"), Side::A, Piece::Queen)
        .piece(sq("d8"), Side::B, Piece::King)
        .piece(sq("h7"), Side::B, Piece::Pawn)
        .build();
    let mut game = Game::from_board(board, Side::A, GameOptions::default());

    let events = play(&mut game, "queen", "d4", "d8");
    assert_eq!(events.len(), 2);
    assert_eq!(events[1], GameEvent::GameOver(Outcome::Win(Side::A)));
    assert_eq!(game.outcome(), Some(Outcome::Win(Side::A)));
    assert_eq!(game.choose(0), Err(GameError::GameFinished));
    assert_eq!(game.choose_token("0"), Err(GameError::GameFinished));
}

#[test]
fn test_pawn_promotes_on_far_rank() {
    let board = BoardBuilder::new()
        .piece(sq("a1"), Side::A, Piece::King)
        .piece(sq("b7"), Side::A, Piece::Pawn)
        .piece(sq("h8"), Side::B, Piece::King)
        .build();
    let mut game = Game::from_board(board, Side::A, GameOptions::default());

    let events = play(&mut game, "pawn", "b7", "b8");
    let GameEvent::MoveApplied(applied) = events[0] else {
        panic!("expected a move event");
    };
    assert_eq!(applied.promoted, Some(Piece::Queen));
    let a = game.board().placements(Side::A);
    assert!(!a.has(Piece::Pawn));
    assert_eq!(a.squares(Piece::Queen), &[sq("b8")]);
}

#[test]
fn test_promotion_with_capture() {
    let board = BoardBuilder::new()
        .piece(sq("a1"), Side::A, Piece::King)
        .piece(sq("h1"), Side::A, Piece::Queen)
        .piece(sq("b7"), Side::A, Piece::Pawn)
        .piece(sq("c8"), Side::B, Piece::Knight)
        .piece(sq("h8"), Side::B, Piece::King)
        .build();
    let mut game = Game::from_board(board, Side::A, GameOptions::default());

    let events = play(&mut game, "pawn", "b7", "c8");
    let GameEvent::MoveApplied(applied) = events[0] else {
        panic!("expected a move event");
    };
    assert_eq!(applied.captured, Some(Piece::Knight));
    assert_eq!(applied.promoted, Some(Piece::Bishop));
    assert_eq!(game.board().piece_at(sq("c8")), Some((Side::A, Piece::Bishop)));
    assert!(!game.board().placements(Side::B).has(Piece::Knight));
}

#[test]
fn test_missing_king_is_detected_without_moving() {
    let board = BoardBuilder::starting_position()
        .without(Side::B, Piece::King)
        .build();
    let mut game = Game::from_board(board.clone(), Side::A, GameOptions::default());
    assert_eq!(game.state(), &TurnState::GameOver(Outcome::Win(Side::A)));

    let mut provider = ScriptedChooser::new(["0", "0", "0"]);
    let report = play_turn(&mut game, &mut provider).unwrap();
    assert_eq!(report, TurnReport::Finished(Outcome::Win(Side::A)));
    assert_eq!(game.board(), &board);
    assert_eq!(provider.remaining(), 3);
}

#[test]
fn test_stalemate_policies() {
    let game = Game::from_board(frozen_side_a(), Side::A, GameOptions::default());
    assert_eq!(game.outcome(), Some(Outcome::Draw));

    let options = GameOptions {
        stalemate: StalematePolicy::Error,
        ..GameOptions::default()
    };
    let mut game = Game::from_board(frozen_side_a(), Side::A, options);
    assert_eq!(
        game.state(),
        &TurnState::Aborted(GameError::NoLegalMoves { side: Side::A })
    );
    let mut provider = ScriptedChooser::default();
    assert_eq!(
        play_turn(&mut game, &mut provider),
        Err(GameError::NoLegalMoves { side: Side::A })
    );
}

#[test]
fn test_play_turn_reports_missing_input() {
    let mut game = Game::default();
    let mut provider = ScriptedChooser::new(["1"]);
    let err = GameError::MissingInput {
        point: ChoicePoint::Piece,
    };
    assert_eq!(play_turn(&mut game, &mut provider), Err(err.clone()));
    assert_eq!(game.state(), &TurnState::Aborted(err));
    assert_eq!(game.choose(0), Err(GameError::GameFinished));
    assert_eq!(game.board(), &Board::new());
}

#[test]
fn test_missing_input_under_retry_keeps_game_open() {
    let options = GameOptions {
        invalid_selection: InvalidSelectionPolicy::Retry,
        ..GameOptions::default()
    };
    let mut game = Game::new(options);
    let mut provider = ScriptedChooser::default();
    assert!(play_turn(&mut game, &mut provider).is_err());
    assert_eq!(game.state().choice_point(), Some(ChoicePoint::PieceType));
}

#[test]
fn test_play_game_twice_credits_once() {
    let board = BoardBuilder::starting_position()
        .without(Side::B, Piece::King)
        .build();
    let mut game = Game::from_board(board, Side::A, GameOptions::default());
    let mut provider = ScriptedChooser::default();
    let mut score = Scoreboard::new();

    for _ in 0..2 {
        assert_eq!(
            play_game(&mut game, &mut provider, &mut score),
            Ok(Outcome::Win(Side::A))
        );
    }
    assert_eq!(score.wins(Side::A), 1);
    assert_eq!(score.to_string(), "playerA 1 : 0 playerB");
}

#[test]
fn test_take_outcome_hands_over_once() {
    let mut game = Game::default();
    assert_eq!(game.take_outcome(), None);

    let board = BoardBuilder::starting_position()
        .without(Side::A, Piece::King)
        .build();
    let mut game = Game::from_board(board, Side::A, GameOptions::default());
    assert_eq!(game.take_outcome(), Some(Outcome::Win(Side::B)));
    assert_eq!(game.take_outcome(), None);
    assert_eq!(game.outcome(), Some(Outcome::Win(Side::B)));
}

#[test]
fn test_play_turn_retries_under_retry_policy() {
    let options = GameOptions {
        invalid_selection: InvalidSelectionPolicy::Retry,
        ..GameOptions::default()
    };
    let mut game = Game::new(options);
    let mut provider = ScriptedChooser::new(["9", "1", "x", "4", "1"]);
    let report = play_turn(&mut game, &mut provider).unwrap();
    let TurnReport::Moved(applied) = report else {
        panic!("expected a move");
    };
    assert_eq!((applied.from, applied.to), (sq("e2"), sq("e4")));
}

#[test]
fn test_play_game_records_once() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Side::A, Piece::King)
        .piece(sq("e7"), Side::B, Piece::Queen)
        .piece(sq("e8"), Side::B, Piece::King)
        .build();
    let occ = Occupancy::new(board.placements(Side::B), board.placements(Side::A));
    let to_e1 = queen_moves(sq("e7"), &occ)
        .iter()
        .position(|&m| m == sq("e1"))
        .unwrap();

    let mut game = Game::from_board(board, Side::B, GameOptions::default());
    assert_eq!(game.state().option_labels(), vec!["king", "queen"]);
    let mut provider = ScriptedChooser::new(["1".to_string(), "0".to_string(), to_e1.to_string()]);
    let mut score = Scoreboard::new();

    let outcome = play_game(&mut game, &mut provider, &mut score).unwrap();
    assert_eq!(outcome, Outcome::Win(Side::B));
    assert_eq!(score.wins(Side::B), 1);
    assert_eq!(score.to_string(), "playerA 0 : 1 playerB");

    // a finished game is reported again but not credited twice
    assert_eq!(
        play_turn(&mut game, &mut provider),
        Ok(TurnReport::Finished(Outcome::Win(Side::B)))
    );
    assert_eq!(score.games_won(), 1);
}
