//! Choice providers: whoever answers the engine's questions.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Side;

use super::{ChoicePoint, GameError, SelectionError};

/// A question put to a choice provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    pub side: Side,
    pub point: ChoicePoint,
    /// Option labels; the answer is an index into this list.
    pub labels: Vec<String>,
}

impl Prompt {
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.labels.len()
    }
}

/// Validate a choice token against `count` options.
///
/// Accepts a non-negative integer strictly below `count`, with surrounding
/// whitespace ignored. Nothing is normalized or clamped.
pub fn parse_choice(token: &str, count: usize) -> Result<usize, SelectionError> {
    let trimmed = token.trim();
    let value: i64 = trimmed.parse().map_err(|_| SelectionError::NotANumber {
        token: trimmed.to_string(),
    })?;
    let index = usize::try_from(value).map_err(|_| SelectionError::Negative {
        token: trimmed.to_string(),
    })?;
    if index < count {
        Ok(index)
    } else {
        Err(SelectionError::OutOfRange { index, count })
    }
}

/// Something that answers prompts with index tokens.
pub trait ChoiceProvider {
    /// Answer `prompt`, or `None` if no answer is available.
    fn choose(&mut self, prompt: &Prompt) -> Option<String>;

    /// Told when an answer was rejected and the same prompt will be repeated.
    fn rejected(&mut self, _error: &GameError) {}
}

impl<P: ChoiceProvider + ?Sized> ChoiceProvider for &mut P {
    fn choose(&mut self, prompt: &Prompt) -> Option<String> {
        (**self).choose(prompt)
    }

    fn rejected(&mut self, error: &GameError) {
        (**self).rejected(error);
    }
}

/// Picks uniformly among the offered options from a seeded generator.
#[derive(Clone, Debug)]
pub struct RandomChooser {
    rng: StdRng,
}

impl RandomChooser {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        RandomChooser {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ChoiceProvider for RandomChooser {
    fn choose(&mut self, prompt: &Prompt) -> Option<String> {
        if prompt.count() == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..prompt.count()).to_string())
    }
}

/// Replays a fixed sequence of tokens, then runs dry.
#[derive(Clone, Debug, Default)]
pub struct ScriptedChooser {
    tokens: VecDeque<String>,
}

impl ScriptedChooser {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedChooser {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl ChoiceProvider for ScriptedChooser {
    fn choose(&mut self, _prompt: &Prompt) -> Option<String> {
        self.tokens.pop_front()
    }
}
