use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use super::EngineState;
use crate::*;

/// One code-breaking session: a fixed secret and the guesses made against it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CodebreakerEngine {
    config: CodeConfig,
    secret: Code,
    history: Vec<GuessRecord>,
    state: EngineState,
}

impl CodebreakerEngine {
    pub fn new(secret: &[Symbol], config: CodeConfig) -> Result<Self> {
        config.validate()?;
        let secret = Code::parse(secret, &config)?;
        Ok(Self {
            config,
            secret,
            history: Vec::with_capacity(config.max_guesses.into()),
            state: Default::default(),
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn config(&self) -> &CodeConfig {
        &self.config
    }

    pub fn secret(&self) -> &Code {
        &self.secret
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    pub fn guesses_left(&self) -> usize {
        usize::from(self.config.max_guesses).saturating_sub(self.history.len())
    }

    /// Validates, scores, and records a guess.
    pub fn submit(&mut self, symbols: &[Symbol]) -> Result<&GuessRecord> {
        self.check_not_finished()?;
        let guess = Code::parse(symbols, &self.config)?;
        let feedback = evaluate(&guess, &self.secret);

        self.state = EngineState::after_submission(
            feedback.is_solved(),
            self.history.len() + 1,
            self.config.max_guesses.into(),
        );
        log::debug!(
            "guess {} [{guess}] scored {:?}, state {:?}",
            self.history.len() + 1,
            feedback.counts(),
            self.state
        );

        self.history.push(GuessRecord::new(guess, feedback));
        Ok(&self.history[self.history.len() - 1])
    }

    /// Codes still consistent with every guess so far.
    pub fn remaining_possibilities(&self) -> u64 {
        count_remaining(&self.history, self.config)
    }

    pub fn symbol_knowledge(&self) -> Vec<SymbolKnowledge> {
        symbol_knowledge(&self.history, self.config.alphabet_size)
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(secret: &[Symbol], config: CodeConfig) -> CodebreakerEngine {
        CodebreakerEngine::new(secret, config).unwrap()
    }

    #[test]
    fn new_rejects_invalid_secret() {
        assert_eq!(
            CodebreakerEngine::new(&[9, 0, 0, 0], CodeConfig::SPELLCAST).unwrap_err(),
            GameError::SymbolOutOfRange {
                symbol: 9,
                alphabet_size: 6
            }
        );
    }

    #[test]
    fn new_rejects_empty_alphabet() {
        let config = CodeConfig::new_unchecked(0, 4, 6, Consistency::PerPosition);
        assert_eq!(
            CodebreakerEngine::new(&[0, 0, 0, 0], config).unwrap_err(),
            GameError::InvalidConfig
        );
        let config = CodeConfig::new_unchecked(6, 0, 6, Consistency::PerPosition);
        assert_eq!(CodebreakerEngine::new(&[], config).unwrap_err(), GameError::InvalidConfig);
    }

    #[test]
    fn winning_guess_finishes_the_session() {
        let mut engine = engine(&[3, 8, 1, 6], CodeConfig::SIGNAL_LOCK);
        assert!(engine.state().is_ready());
        assert_eq!(engine.remaining_possibilities(), 10_000);

        let record = engine.submit(&[1, 2, 3, 4]).unwrap();
        assert_eq!(record.feedback.counts(), (0, 2));
        assert_eq!(engine.state(), EngineState::Active);
        assert_eq!(engine.remaining_possibilities(), 316);

        let record = engine.submit(&[3, 8, 1, 6]).unwrap();
        assert!(record.feedback.is_solved());
        assert_eq!(engine.state(), EngineState::Won);
        assert_eq!(engine.remaining_possibilities(), 1);
        assert_eq!(engine.submit(&[3, 8, 1, 6]), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn running_out_of_guesses_loses() {
        let mut engine = engine(&[2, 0, 5, 1], CodeConfig::SIGNAL_BREAK);
        for _ in 0..5 {
            engine.submit(&[0, 0, 0, 0]).unwrap();
            assert_eq!(engine.state(), EngineState::Active);
        }
        engine.submit(&[0, 0, 0, 0]).unwrap();
        assert_eq!(engine.state(), EngineState::Lost);
        assert_eq!(engine.guesses_left(), 0);
        assert_eq!(engine.history().len(), 6);
    }

    #[test]
    fn invalid_guess_is_not_recorded() {
        let mut engine = engine(&[2, 0, 5, 1], CodeConfig::SPELLCAST);
        assert_eq!(
            engine.submit(&[0, 1, 2]),
            Err(GameError::WrongCodeLength {
                expected: 4,
                actual: 3
            })
        );
        assert!(engine.history().is_empty());
        assert!(engine.state().is_ready());
    }

    #[test]
    fn symbol_knowledge_tracks_history() {
        let mut engine = engine(&[3, 8, 1, 6], CodeConfig::SIGNAL_LOCK);
        engine.submit(&[3, 0, 0, 0]).unwrap();
        let knowledge = engine.symbol_knowledge();
        assert_eq!(knowledge[3], SymbolKnowledge::Locked);
        assert_eq!(knowledge[0], SymbolKnowledge::Eliminated);
        assert_eq!(knowledge[9], SymbolKnowledge::Unknown);
    }
}
