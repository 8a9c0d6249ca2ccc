use core::fmt;
use core::ops::Index;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

const INLINE: usize = MAX_CODE_LENGTH as usize;

/// Fixed-length sequence of alphabet symbols, either a secret or a guess.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Code(SmallVec<[Symbol; INLINE]>);

impl Code {
    /// Checks length and alphabet against `config` before building the code.
    pub fn parse(symbols: &[Symbol], config: &CodeConfig) -> Result<Self> {
        if symbols.len() != config.code_len() {
            return Err(GameError::WrongCodeLength {
                expected: config.code_len(),
                actual: symbols.len(),
            });
        }
        if let Some(&symbol) = symbols.iter().find(|&&s| s >= config.alphabet_size) {
            return Err(GameError::SymbolOutOfRange {
                symbol,
                alphabet_size: config.alphabet_size,
            });
        }
        Ok(Self::from_slice_unchecked(symbols))
    }

    pub fn from_slice_unchecked(symbols: &[Symbol]) -> Self {
        Self(SmallVec::from_slice(symbols))
    }

    /// Code at position `rank` of the lexicographic enumeration of the
    /// space, first symbol most significant.
    pub fn from_rank(mut rank: u64, config: &CodeConfig) -> Self {
        let radix = u64::from(config.alphabet_size.max(1));
        let mut symbols: SmallVec<[Symbol; INLINE]> = SmallVec::from_elem(0, config.code_len());
        for slot in symbols.iter_mut().rev() {
            *slot = (rank % radix) as Symbol;
            rank /= radix;
        }
        Self(symbols)
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Index<usize> for Code {
    type Output = Symbol;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Per-position marks for one guess, parallel to the guess.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback(SmallVec<[Mark; INLINE]>);

impl Feedback {
    pub fn from_marks(marks: &[Mark]) -> Self {
        Self(SmallVec::from_slice(marks))
    }

    pub(crate) fn all_absent(len: usize) -> Self {
        Self(SmallVec::from_elem(Mark::Absent, len))
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.0[index] = mark;
    }

    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn exact_count(&self) -> usize {
        self.0.iter().filter(|mark| mark.is_exact()).count()
    }

    pub fn present_count(&self) -> usize {
        self.0.iter().filter(|mark| mark.is_present()).count()
    }

    pub fn absent_count(&self) -> usize {
        self.len() - self.exact_count() - self.present_count()
    }

    /// `(exact, present)` totals.
    pub fn counts(&self) -> (usize, usize) {
        (self.exact_count(), self.present_count())
    }

    pub fn is_solved(&self) -> bool {
        !self.is_empty() && self.exact_count() == self.len()
    }

    /// Gauge value for the dial game: 25 per exact, 5 per present, capped at 100.
    pub fn signal_strength(&self) -> u8 {
        let raw = 25 * self.exact_count() + 5 * self.present_count();
        raw.min(100) as u8
    }
}

impl Index<usize> for Feedback {
    type Output = Mark;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// One entry of the append-only guess history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess: Code,
    pub feedback: Feedback,
}

impl GuessRecord {
    pub fn new(guess: Code, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }
}
