//! Win tally across games.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Side;

use super::Outcome;

/// Two-slot win counter, owned by whoever runs a series of games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scoreboard {
    wins: [u32; 2],
}

impl Scoreboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit the side that kept its king. Draws change nothing.
    pub fn record(&mut self, outcome: Outcome) {
        if let Outcome::Win(side) = outcome {
            self.wins[side.index()] += 1;
        }
    }

    #[must_use]
    pub fn wins(&self, side: Side) -> u32 {
        self.wins[side.index()]
    }

    #[must_use]
    pub fn games_won(&self) -> u32 {
        self.wins.iter().sum()
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "playerA {} : {} playerB", self.wins[0], self.wins[1])
    }
}
