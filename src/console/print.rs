//! Text rendering for the console. The library itself never formats output.

use std::fmt::Write as _;

use crate::board::{Board, Placements, Side, Square};
use crate::game::{AppliedMove, Outcome, Prompt};

/// Uppercase letters for side A, lowercase for side B, `.` for empty.
#[must_use]
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for rank in (0..8).rev() {
        let _ = write!(out, "{} ", rank + 1);
        for file in 0..8 {
            let c = match board.piece_at(Square(rank, file)) {
                Some((Side::A, piece)) => piece.to_char().to_ascii_uppercase(),
                Some((Side::B, piece)) => piece.to_char(),
                None => '.',
            };
            out.push(' ');
            out.push(c);
        }
        out.push('\n');
    }
    out.push_str("   a b c d e f g h\n");
    out
}

/// `king: e1 | queen: d1 | ...` in listing order.
#[must_use]
pub fn render_placements(placements: &Placements) -> String {
    placements
        .iter()
        .map(|(piece, squares)| {
            let squares: Vec<String> = squares.iter().map(ToString::to_string).collect();
            format!("{piece}: {}", squares.join(" "))
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Numbered option list followed by the input request.
#[must_use]
pub fn render_prompt(prompt: &Prompt) -> String {
    let mut out = String::new();
    for (index, label) in prompt.labels.iter().enumerate() {
        let _ = writeln!(out, "{index} {label}");
    }
    let _ = write!(out, "Enter the preceding num to your choice {}: ", prompt.point);
    out
}

#[must_use]
pub fn describe_move(applied: &AppliedMove) -> String {
    let mut line = format!(
        "{} moved {} {} -> {}",
        applied.side, applied.piece, applied.from, applied.to
    );
    if let Some(captured) = applied.captured {
        let _ = write!(line, ", took {captured}");
    }
    if let Some(promoted) = applied.promoted {
        let _ = write!(line, ", promoted to {promoted}");
    }
    line
}

#[must_use]
pub fn describe_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Win(side) => format!("{side} wins"),
        Outcome::Draw => "no legal moves: draw".to_string(),
    }
}
