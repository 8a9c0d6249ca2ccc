use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Spaces beyond this many codes are still counted, but slowly.
const SLOW_SPACE_SIZE: u64 = 1 << 20;

/// How a candidate's recomputed feedback is compared with a recorded one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Consistency {
    /// Every position must carry the same mark.
    PerPosition,
    /// Only the `(exact, present)` totals must agree.
    Counts,
}

impl Default for Consistency {
    fn default() -> Self {
        Self::PerPosition
    }
}

impl Consistency {
    pub fn agrees(self, recomputed: &Feedback, recorded: &Feedback) -> bool {
        match self {
            Self::PerPosition => recomputed == recorded,
            Self::Counts => recomputed.counts() == recorded.counts(),
        }
    }
}

/// Whether `candidate` as the secret would have produced every recorded feedback.
pub fn is_consistent(candidate: &[Symbol], history: &[GuessRecord], consistency: Consistency) -> bool {
    history.iter().all(|record| {
        let recomputed = evaluate_slices(record.guess.symbols(), candidate);
        consistency.agrees(&recomputed, &record.feedback)
    })
}

/// Lexicographic walk over the whole code space, keeping codes consistent
/// with the history.
#[derive(Clone, Debug)]
pub struct Candidates<'a> {
    history: &'a [GuessRecord],
    config: CodeConfig,
    digits: SmallVec<[Symbol; 8]>,
    exhausted: bool,
}

impl<'a> Candidates<'a> {
    pub fn new(history: &'a [GuessRecord], config: CodeConfig) -> Self {
        if config.space_size() > SLOW_SPACE_SIZE {
            log::warn!(
                "enumerating {} codes for a {}^{} space",
                config.space_size(),
                config.alphabet_size,
                config.code_length
            );
        }
        Self {
            history,
            config,
            digits: SmallVec::from_elem(0, config.code_len()),
            exhausted: config.alphabet_size == 0,
        }
    }

    /// Odometer increment, last position fastest.
    fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.config.alphabet_size {
                return;
            }
            *digit = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for Candidates<'_> {
    type Item = Code;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.exhausted {
            let consistent = is_consistent(&self.digits, self.history, self.config.consistency);
            let candidate = consistent.then(|| Code::from_slice_unchecked(&self.digits));
            self.advance();
            if candidate.is_some() {
                return candidate;
            }
        }
        None
    }
}

pub fn candidates(history: &[GuessRecord], config: CodeConfig) -> Candidates<'_> {
    Candidates::new(history, config)
}

/// Number of codes still consistent with every entry of `history`.
///
/// Brute force over the whole space; recomputed from scratch each call.
/// A result of zero means the history contradicts itself.
pub fn count_remaining(history: &[GuessRecord], config: CodeConfig) -> u64 {
    if history.is_empty() {
        return config.space_size();
    }

    let count = candidates(history, config).count() as u64;
    log::debug!(
        "{count} of {} codes remain after {} guesses",
        config.space_size(),
        history.len()
    );
    if count == 0 {
        log::warn!("guess history is inconsistent, no code satisfies it");
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn record(guess: &[Symbol], secret: &[Symbol]) -> GuessRecord {
        let guess = Code::from_slice_unchecked(guess);
        let feedback = evaluate(&guess, &Code::from_slice_unchecked(secret));
        GuessRecord::new(guess, feedback)
    }

    #[test]
    fn empty_history_is_the_full_space() {
        assert_eq!(count_remaining(&[], CodeConfig::SPELLCAST), 1_296);
        assert_eq!(count_remaining(&[], CodeConfig::SIGNAL_LOCK), 10_000);
    }

    #[test]
    fn empty_history_enumeration_matches_space_size() {
        let config = CodeConfig::new(3, 3, 1);
        assert_eq!(candidates(&[], config).count(), 27);
    }

    #[test]
    fn solved_guess_leaves_only_the_secret() {
        let history = [record(&[2, 0, 5, 1], &[2, 0, 5, 1])];
        assert_eq!(count_remaining(&history, CodeConfig::SPELLCAST), 1);

        let history = [record(&[3, 4, 0, 3], &[3, 4, 0, 3])];
        let remaining: Vec<Code> = candidates(&history, CodeConfig::SPELLCAST).collect();
        assert_eq!(remaining, vec![Code::from_slice_unchecked(&[3, 4, 0, 3])]);
    }

    #[test]
    fn repeated_symbols_leave_genuine_twins() {
        let history = [record(&[4, 3, 3, 0], &[3, 4, 0, 3])];
        let remaining: Vec<Code> = candidates(&history, CodeConfig::SPELLCAST).collect();
        assert_eq!(
            remaining,
            vec![
                Code::from_slice_unchecked(&[3, 0, 4, 3]),
                Code::from_slice_unchecked(&[3, 4, 0, 3]),
            ]
        );
    }

    #[test]
    fn single_guess_counts_match_reference() {
        let secret = [2, 0, 5, 1];
        let config = CodeConfig::SPELLCAST;
        assert_eq!(count_remaining(&[record(&[0, 0, 1, 1], &secret)], config), 16);
        assert_eq!(count_remaining(&[record(&[0, 1, 2, 3], &secret)], config), 34);

        let history = [record(&[0, 0, 0, 0], &secret)];
        assert_eq!(history[0].feedback.counts(), (1, 0));
        assert_eq!(count_remaining(&history, config), 125);
    }

    #[test]
    fn counts_consistency_admits_more_codes() {
        let secret = [2, 0, 5, 1];
        let history = [record(&[0, 0, 1, 1], &secret), record(&[2, 2, 3, 3], &secret)];

        assert_eq!(count_remaining(&history, CodeConfig::SPELLCAST), 2);
        assert_eq!(count_remaining(&history, CodeConfig::SIGNAL_BREAK), 28);
    }

    #[test]
    fn digit_space_counts_match_reference() {
        let secret = [3, 8, 1, 6];
        let config = CodeConfig::SIGNAL_LOCK;
        assert_eq!(count_remaining(&[record(&[1, 2, 3, 4], &secret)], config), 316);
        assert_eq!(count_remaining(&[record(&[0, 0, 0, 0], &secret)], config), 6_561);
        assert_eq!(count_remaining(&[record(&[3, 8, 6, 1], &secret)], config), 1);
        assert_eq!(
            count_remaining(
                &[record(&[3, 8, 6, 1], &secret)],
                config.with_consistency(Consistency::Counts)
            ),
            6
        );
    }

    #[test]
    fn contradictory_history_leaves_nothing() {
        let guess = Code::from_slice_unchecked(&[0, 1, 2, 3]);
        let history = [
            GuessRecord::new(guess.clone(), Feedback::from_marks(&[Mark::Exact; 4])),
            GuessRecord::new(guess, Feedback::from_marks(&[Mark::Absent; 4])),
        ];
        assert_eq!(count_remaining(&history, CodeConfig::SPELLCAST), 0);
    }

    #[test]
    fn candidates_are_ordered_and_all_consistent() {
        let secret = [1, 5, 3, 2];
        let history = [record(&[0, 1, 2, 3], &secret), record(&[1, 4, 5, 2], &secret)];
        let remaining: Vec<Code> = candidates(&history, CodeConfig::SPELLCAST).collect();

        assert!(remaining.windows(2).all(|pair| pair[0].symbols() < pair[1].symbols()));
        assert!(remaining.iter().any(|code| code.symbols() == secret));
        assert!(remaining
            .iter()
            .all(|code| is_consistent(code.symbols(), &history, Consistency::PerPosition)));
    }
}
