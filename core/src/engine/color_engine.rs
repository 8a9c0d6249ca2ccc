use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use super::EngineState;
use crate::*;

pub const MAX_COLOR_GUESSES: u8 = 6;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorGuess {
    pub guess: Hsl,
    pub feedback: ColorFeedback,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChromaEngine {
    target: Hsl,
    history: Vec<ColorGuess>,
    state: EngineState,
}

impl ChromaEngine {
    pub fn new(target: Hsl) -> Self {
        Self {
            target: Hsl::new(target.h, target.s, target.l),
            history: Vec::with_capacity(MAX_COLOR_GUESSES.into()),
            state: Default::default(),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn target(&self) -> Hsl {
        self.target
    }

    pub fn history(&self) -> &[ColorGuess] {
        &self.history
    }

    pub fn guesses_left(&self) -> usize {
        usize::from(MAX_COLOR_GUESSES).saturating_sub(self.history.len())
    }

    /// Best closeness reached so far.
    pub fn best_closeness(&self) -> Option<u8> {
        self.history.iter().map(|entry| entry.feedback.closeness).max()
    }

    /// Scores a guess. Out-of-range channels are wrapped and clamped first.
    pub fn submit(&mut self, guess: Hsl) -> Result<&ColorGuess> {
        if self.state.is_finished() {
            return Err(GameError::AlreadyEnded);
        }
        let guess = Hsl::new(guess.h, guess.s, guess.l);
        let feedback = ColorFeedback::evaluate(guess, self.target);

        self.state = EngineState::after_submission(
            feedback.is_win(),
            self.history.len() + 1,
            MAX_COLOR_GUESSES.into(),
        );
        log::debug!(
            "colour guess {} {guess:?} at {}%, state {:?}",
            self.history.len() + 1,
            feedback.closeness,
            self.state
        );

        self.history.push(ColorGuess { guess, feedback });
        Ok(&self.history[self.history.len() - 1])
    }
}
