//! Precomputed jump targets for knights and kings.

use once_cell::sync::Lazy;

use super::super::Square;

/// (file, rank) jumps: the two-file jumps first, then the two-rank jumps.
const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

fn jump_table(deltas: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        deltas
            .iter()
            .filter_map(|&(df, dr)| from.offset(df, dr))
            .collect()
    })
}

pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| jump_table(&KNIGHT_DELTAS));

/// Neighbours ordered by ascending file, then ascending rank.
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    let deltas: Vec<(isize, isize)> = (-1..=1)
        .flat_map(|df| (-1..=1).map(move |dr| (df, dr)))
        .filter(|&delta| delta != (0, 0))
        .collect();
    jump_table(&deltas)
});
