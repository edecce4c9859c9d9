//! Constraint filtering
//!
//! A word survives when it satisfies every known constraint:
//! 1. contains every letter from any present-but-misplaced set
//! 2. has the known letter at each solved position
//! 3. has no known-absent letter anywhere
//! 4. does not repeat a misplaced letter at the position it was seen

use crate::core::{ConstraintState, Word, WordSet};
use rustc_hash::FxHashSet;

/// Check a word against constraints
///
/// `required` must be `constraints.required_letters()`; it is passed in so
/// that filtering a whole set computes it once.
#[must_use]
pub fn satisfies(word: &Word, constraints: &ConstraintState, required: &FxHashSet<char>) -> bool {
    if !required.iter().all(|&c| word.has_letter(c)) {
        return false;
    }

    word.chars().iter().enumerate().all(|(i, c)| {
        constraints.correct_at(i).is_none_or(|known| known == *c)
            && !constraints.known_absent().contains(c)
            && !constraints.present_wrong_at(i).contains(c)
    })
}

/// Check a single word against constraints
#[must_use]
pub fn is_consistent(word: &Word, constraints: &ConstraintState) -> bool {
    satisfies(word, constraints, &constraints.required_letters())
}

/// Narrow a word set to the words consistent with `constraints`
///
/// Order is preserved.
///
/// # Examples
/// ```
/// use letterwise::core::{ConstraintInput, ConstraintState, Language};
/// use letterwise::solver::filter;
/// use letterwise::wordlists::loader::parse_dictionary;
///
/// let words = parse_dictionary("APPLE,ANGER,BREAD,CRANE,GRAPE", 5, |c| {
///     Language::English.contains(c)
/// });
/// let input = ConstraintInput {
///     correct: " R   ".to_string(),
///     absent: "B".to_string(),
///     ..ConstraintInput::default()
/// };
/// let constraints = ConstraintState::from_input(5, &input).unwrap();
///
/// let left = filter(&words, &constraints);
/// let texts: Vec<&str> = left.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, vec!["CRANE", "GRAPE"]);
/// ```
#[must_use]
pub fn filter(words: &WordSet, constraints: &ConstraintState) -> WordSet {
    let required = constraints.required_letters();
    words.retain(|word| satisfies(word, constraints, &required))
}

/// Words that could still be the answer
///
/// This is exactly the filter output.
#[must_use]
pub fn compute_valid_guesses(words: &WordSet, constraints: &ConstraintState) -> WordSet {
    filter(words, constraints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConstraintInput, Feedback, Language};
    use crate::wordlists::loader::parse_dictionary;

    const SAMPLE: &str = "APPLE,ANGER,BREAD,CRANE,GRAPE";

    fn words(raw: &str) -> WordSet {
        parse_dictionary(raw, 5, |c| Language::English.contains(c))
    }

    fn constraints(correct: &str, present: &[&str], absent: &str) -> ConstraintState {
        let input = ConstraintInput {
            correct: correct.to_string(),
            present: present.iter().map(ToString::to_string).collect(),
            absent: absent.to_string(),
        };
        ConstraintState::from_input(5, &input).unwrap()
    }

    fn texts(set: &WordSet) -> Vec<&str> {
        set.iter().map(Word::text).collect()
    }

    #[test]
    fn no_constraints_keeps_everything() {
        let set = words(SAMPLE);
        assert_eq!(filter(&set, &ConstraintState::new(5)), set);
    }

    #[test]
    fn correct_and_absent_letters() {
        let set = words(SAMPLE);
        let left = filter(&set, &constraints(" R   ", &[], "B"));
        assert_eq!(texts(&left), vec!["CRANE", "GRAPE"]);
    }

    #[test]
    fn required_letters_are_position_agnostic() {
        let set = words(SAMPLE);
        // G seen at position 0 somewhere: word needs a G, just not first
        let left = filter(&set, &constraints("", &["G"], ""));
        assert_eq!(texts(&left), vec!["ANGER"]);
    }

    #[test]
    fn misplaced_letter_excluded_at_its_position() {
        let set = words(SAMPLE);
        // P known present, not at position 1
        let left = filter(&set, &constraints("", &["", "P"], ""));
        assert_eq!(texts(&left), vec!["GRAPE"]);
    }

    #[test]
    fn required_letters_from_all_positions_must_all_appear() {
        let set = words(SAMPLE);
        let left = filter(&set, &constraints("", &["", "", "", "C", "B"], ""));
        assert!(left.is_empty());

        let left = filter(&set, &constraints("", &["N", "", "", "", "C"], ""));
        assert_eq!(texts(&left), vec!["CRANE"]);
    }

    #[test]
    fn survivors_satisfy_every_rule() {
        let set = words(crate::wordlists::ENGLISH);
        let state = constraints(" R", &["", "", "E", "", "T"], "SLI");
        let required = state.required_letters();

        for word in &filter(&set, &state) {
            assert!(required.iter().all(|&c| word.has_letter(c)));
            assert_eq!(word.char_at(1), 'R');
            for (i, c) in word.chars().iter().enumerate() {
                assert!(!state.known_absent().contains(c));
                assert!(!state.present_wrong_at(i).contains(c));
            }
        }
    }

    #[test]
    fn filter_is_idempotent() {
        let set = words(crate::wordlists::ENGLISH);
        let state = constraints("", &["A", "", "", "E"], "NO");
        let once = filter(&set, &state);
        assert_eq!(filter(&once, &state), once);
    }

    #[test]
    fn answer_survives_its_own_feedback() {
        let set = words(crate::wordlists::ENGLISH);
        let answer = set.iter().find(|w| w.text() == "SPEED").unwrap().clone();

        let mut state = ConstraintState::new(5);
        for guess in ["CRANE", "EERIE", "ELDER", "DEEDS"] {
            let guess = Word::new(guess, 5, |c| Language::English.contains(c)).unwrap();
            let feedback = Feedback::calculate(&guess, &answer);
            state.apply_feedback(&guess, &feedback).unwrap();

            assert!(is_consistent(&answer, &state), "lost after {guess}");
        }

        let left = compute_valid_guesses(&set, &state);
        assert!(left.contains("SPEED"));
    }

    #[test]
    fn valid_guesses_equal_filter() {
        let set = words(SAMPLE);
        let state = constraints("", &["", "", "", "", "R"], "");
        assert_eq!(compute_valid_guesses(&set, &state), filter(&set, &state));
    }

    #[test]
    fn empty_set_stays_empty() {
        assert!(filter(&words(""), &constraints("C", &[], "")).is_empty());
    }
}
