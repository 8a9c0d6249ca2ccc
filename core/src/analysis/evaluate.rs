use smallvec::SmallVec;

use crate::*;

/// Scores `guess` against `secret` with mastermind rules.
///
/// Exact matches are claimed first, left to right. Each remaining guess
/// position then claims the leftmost unclaimed equal symbol of the secret,
/// so every secret symbol backs at most one mark.
///
/// Both slices must have the same length.
pub fn evaluate_slices<T: PartialEq>(guess: &[T], secret: &[T]) -> Feedback {
    debug_assert_eq!(guess.len(), secret.len());
    let len = guess.len().min(secret.len());

    let mut feedback = Feedback::all_absent(len);
    let mut guess_used: SmallVec<[bool; 8]> = SmallVec::from_elem(false, len);
    let mut secret_used: SmallVec<[bool; 8]> = SmallVec::from_elem(false, len);

    for i in 0..len {
        if guess[i] == secret[i] {
            feedback.set(i, Mark::Exact);
            guess_used[i] = true;
            secret_used[i] = true;
        }
    }

    for i in 0..len {
        if guess_used[i] {
            continue;
        }
        let claim = (0..len).find(|&j| !secret_used[j] && guess[i] == secret[j]);
        if let Some(j) = claim {
            feedback.set(i, Mark::Present);
            secret_used[j] = true;
        }
    }

    feedback
}

pub fn evaluate(guess: &Code, secret: &Code) -> Feedback {
    evaluate_slices(guess.symbols(), secret.symbols())
}
