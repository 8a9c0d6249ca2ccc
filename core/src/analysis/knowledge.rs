use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::*;

/// What the history reveals about a single alphabet symbol.
///
/// The strongest mark a symbol has ever received wins, so a symbol that was
/// absent in one guess but exact in another is `Locked`. `Eliminated` only
/// means every appearance was absent, which with repeated symbols can still
/// hide a single occurrence claimed elsewhere.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolKnowledge {
    Unknown,
    Eliminated,
    Drifting,
    Locked,
}

impl Default for SymbolKnowledge {
    fn default() -> Self {
        Self::Unknown
    }
}

impl SymbolKnowledge {
    const fn rank(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Eliminated => 1,
            Self::Drifting => 2,
            Self::Locked => 3,
        }
    }

    fn merge(self, mark: Mark) -> Self {
        let observed = match mark {
            Mark::Exact => Self::Locked,
            Mark::Present => Self::Drifting,
            Mark::Absent => Self::Eliminated,
        };
        if observed.rank() > self.rank() {
            observed
        } else {
            self
        }
    }
}

/// Per-symbol knowledge indexed by symbol, for keypad colouring.
pub fn symbol_knowledge(history: &[GuessRecord], alphabet_size: u8) -> Vec<SymbolKnowledge> {
    let mut knowledge = alloc::vec![SymbolKnowledge::Unknown; usize::from(alphabet_size)];
    for record in history {
        for (&symbol, &mark) in record.guess.symbols().iter().zip(record.feedback.marks()) {
            if let Some(slot) = knowledge.get_mut(usize::from(symbol)) {
                *slot = slot.merge(mark);
            }
        }
    }
    knowledge
}

#[cfg(test)]
mod tests {
    use super::*;
    use SymbolKnowledge::*;

    fn record(guess: &[Symbol], secret: &[Symbol]) -> GuessRecord {
        let guess = Code::from_slice_unchecked(guess);
        let feedback = evaluate(&guess, &Code::from_slice_unchecked(secret));
        GuessRecord::new(guess, feedback)
    }

    #[test]
    fn no_history_is_all_unknown() {
        assert_eq!(symbol_knowledge(&[], 3), [Unknown; 3]);
    }

    #[test]
    fn strongest_mark_wins() {
        let secret = [3, 8, 1, 6];
        let history = [record(&[1, 2, 3, 4], &secret), record(&[3, 0, 0, 0], &secret)];

        let knowledge = symbol_knowledge(&history, 10);

        assert_eq!(knowledge[0], Eliminated);
        assert_eq!(knowledge[1], Drifting);
        assert_eq!(knowledge[2], Eliminated);
        assert_eq!(knowledge[3], Locked);
        assert_eq!(knowledge[4], Eliminated);
        assert_eq!(knowledge[5], Unknown);
    }

    #[test]
    fn repeated_guess_symbol_keeps_best_mark() {
        // one real 3 in the secret, three guessed
        let history = [record(&[3, 3, 3, 0], &[1, 2, 3, 4])];
        assert_eq!(symbol_knowledge(&history, 6)[3], Locked);
    }
}
