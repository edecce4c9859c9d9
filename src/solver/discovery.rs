//! Discovery ranking
//!
//! Ranks words by how much new letter information they would reveal. Letters
//! that any constraint already covers are worth nothing; the rest score their
//! frequency. Words that could themselves be the answer get a boost that grows
//! as the pool of possible answers shrinks.

use super::{FrequencyTable, ScoredWord, score};
use crate::core::{ConstraintState, WordSet};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Valid-guess pools this large or larger never flag or boost a word
pub const VALID_GUESS_LIMIT: usize = 1000;

/// Number of entries shown by [`top_ten`]
pub const TOP_COUNT: usize = 10;

/// Score multiplier for a valid guess, by size of the valid-guess pool
///
/// # Examples
/// ```
/// use letterwise::solver::boost_multiplier;
///
/// assert_eq!(boost_multiplier(3), 10.0);
/// assert_eq!(boost_multiplier(19), 4.0);
/// assert_eq!(boost_multiplier(299), 1.3);
/// assert_eq!(boost_multiplier(999), 1.0);
/// ```
#[must_use]
pub fn boost_multiplier(valid_count: usize) -> f64 {
    match valid_count {
        0..6 => 10.0,
        6..20 => 4.0,
        20..300 => 1.3,
        _ => 1.0,
    }
}

/// Final score for a raw discovery score
///
/// Valid guesses are multiplied by [`boost_multiplier`]; the result is rounded
/// to the nearest integer.
#[must_use]
pub fn boosted_score(raw: usize, is_valid_guess: bool, valid_count: usize) -> usize {
    if is_valid_guess {
        (raw as f64 * boost_multiplier(valid_count)).round() as usize
    } else {
        raw
    }
}

/// Rank `words` by discovery value
///
/// `valid_guesses` is the constraint filter output. A word is flagged as a
/// valid guess when it is in that set and the set has fewer than
/// [`VALID_GUESS_LIMIT`] members. The result is sorted by descending score;
/// ties keep the order of `words`.
///
/// # Examples
/// ```
/// use letterwise::core::{ConstraintInput, ConstraintState, Language};
/// use letterwise::solver::{FrequencyTable, compute_valid_guesses, rank_discoveries};
/// use letterwise::wordlists::loader::parse_dictionary;
///
/// let words = parse_dictionary("APPLE,ANGER,BREAD,CRANE,GRAPE", 5, |c| {
///     Language::English.contains(c)
/// });
/// let freq = FrequencyTable::from_words(&words);
/// let input = ConstraintInput { correct: " R".into(), absent: "B".into(), ..Default::default() };
/// let constraints = ConstraintState::from_input(5, &input).unwrap();
/// let valid = compute_valid_guesses(&words, &constraints);
///
/// let ranked = rank_discoveries(&words, &freq, &constraints, &valid);
/// assert_eq!(ranked[0].word.text(), "GRAPE");
/// assert!(ranked[0].is_valid_guess);
/// ```
#[must_use]
pub fn rank_discoveries(
    words: &WordSet,
    freq: &FrequencyTable,
    constraints: &ConstraintState,
    valid_guesses: &WordSet,
) -> Vec<ScoredWord> {
    let uninteresting = constraints.informative_letters();
    let valid_count = valid_guesses.len();
    let valid: FxHashSet<&str> = if valid_count < VALID_GUESS_LIMIT {
        valid_guesses.iter().map(|w| w.text()).collect()
    } else {
        FxHashSet::default()
    };

    let mut ranked: Vec<ScoredWord> = words
        .as_slice()
        .par_iter()
        .map(|word| {
            let is_valid_guess = valid.contains(word.text());
            let raw = score(word, freq, &uninteresting);
            ScoredWord {
                word: word.clone(),
                score: boosted_score(raw, is_valid_guess, valid_count),
                is_valid_guess,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// First ten entries of a ranking
///
/// # Examples
/// ```
/// use letterwise::solver::top_ten;
///
/// let ranked: Vec<u32> = (0..25).collect();
/// assert_eq!(top_ten(&ranked).len(), 10);
/// assert_eq!(top_ten(&ranked[..3]), &[0, 1, 2]);
/// ```
#[must_use]
pub fn top_ten<T>(ranked: &[T]) -> &[T] {
    &ranked[..ranked.len().min(TOP_COUNT)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConstraintInput, Language, Word};
    use crate::solver::compute_valid_guesses;
    use crate::wordlists::loader::{normalize, parse_dictionary};

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

    /// `count` distinct three-letter words over A-Z: AAA, AAB, AAC, ...
    fn pool(count: usize) -> WordSet {
        let letter = |n: usize| char::from(b'A' + (n % 26) as u8);
        let tokens: Vec<String> = (0..count)
            .map(|i| [letter(i / 676), letter(i / 26), letter(i)].iter().collect())
            .collect();
        normalize(tokens.iter().map(String::as_str), 3, uppercase)
    }

    fn uppercase(c: char) -> bool {
        c.is_ascii_uppercase()
    }

    #[test]
    fn boost_thresholds() {
        assert_eq!(boosted_score(10, true, 5), 100);
        assert_eq!(boosted_score(10, true, 15), 40);
        assert_eq!(boosted_score(10, true, 200), 13);
        assert_eq!(boosted_score(10, true, 500), 10);
        assert_eq!(boosted_score(10, false, 5), 10);
    }

    #[test]
    fn boost_boundaries() {
        assert_eq!(boost_multiplier(5), 10.0);
        assert_eq!(boost_multiplier(6), 4.0);
        assert_eq!(boost_multiplier(20), 1.3);
        assert_eq!(boost_multiplier(300), 1.0);
        // 1.3 rounds to nearest
        assert_eq!(boosted_score(5, true, 100), 7);
        assert_eq!(boosted_score(1, true, 100), 1);
    }

    #[test]
    fn informative_letters_score_nothing() {
        let set = words(SAMPLE);
        let freq = FrequencyTable::from_words(&set);
        let state = constraints(" R", &["", "", "", "", "E"], "ABP");
        let ranked = rank_discoveries(&set, &freq, &state, &WordSet::new(5));

        // Uninteresting: R, E, A, B, P. Remaining: N2 G2 L1 D1 C1
        let scores: Vec<(&str, usize)> = ranked
            .iter()
            .map(|s| (s.word.text(), s.score))
            .collect();
        assert_eq!(
            scores,
            vec![
                ("ANGER", 4),
                ("CRANE", 3),
                ("GRAPE", 2),
                ("APPLE", 1),
                ("BREAD", 1)
            ]
        );
        assert!(ranked.iter().all(|s| !s.is_valid_guess));
    }

    #[test]
    fn valid_guesses_are_flagged_and_boosted() {
        let set = words(SAMPLE);
        let freq = FrequencyTable::from_words(&set);
        let state = constraints(" R   ", &[], "B");
        let valid = compute_valid_guesses(&set, &state);
        assert_eq!(valid.len(), 2);

        let ranked = rank_discoveries(&set, &freq, &state, &valid);

        // Uninteresting: R, B. GRAPE raw = G2 A5 P3 E5 = 15, x10
        // CRANE raw = C1 A5 N2 E5 = 13, x10
        assert_eq!(ranked[0].word.text(), "GRAPE");
        assert_eq!(ranked[0].score, 150);
        assert_eq!(ranked[1].word.text(), "CRANE");
        assert_eq!(ranked[1].score, 130);
        assert!(ranked[..2].iter().all(|s| s.is_valid_guess));
        assert!(ranked[2..].iter().all(|s| !s.is_valid_guess));
    }

    #[test]
    fn pool_size_drives_the_boost() {
        // A=6, B=4, so AAB scores 10 before the boost
        let freq = FrequencyTable::from_words(&normalize(
            ["BBB", "BAA", "AAA", "ACC"],
            3,
            uppercase,
        ));
        assert_eq!(freq.get('A') + freq.get('B'), 10);

        let mut candidates = WordSet::new(3);
        candidates.push(Word::new("AAB", 3, uppercase).unwrap());

        for (size, expected) in [(5, 100), (15, 40), (200, 13), (500, 10)] {
            let valid = pool(size);
            assert_eq!(valid.len(), size);

            let ranked = rank_discoveries(&candidates, &freq, &ConstraintState::new(3), &valid);

            assert_eq!(ranked.len(), 1);
            assert!(ranked[0].is_valid_guess, "AAB should be valid at size {size}");
            assert_eq!(ranked[0].score, expected, "size {size}");
        }
    }

    #[test]
    fn large_valid_pool_disables_flag_and_boost() {
        let valid = pool(VALID_GUESS_LIMIT);
        assert_eq!(valid.len(), VALID_GUESS_LIMIT);
        let freq = FrequencyTable::from_words(&valid);
        let mut candidates = WordSet::new(3);
        candidates.push(Word::new("AAB", 3, uppercase).unwrap());

        let ranked = rank_discoveries(&candidates, &freq, &ConstraintState::new(3), &valid);
        assert!(!ranked[0].is_valid_guess);
        assert_eq!(ranked[0].score, freq.get('A') + freq.get('B'));

        let smaller = pool(VALID_GUESS_LIMIT - 1);
        let ranked = rank_discoveries(&candidates, &freq, &ConstraintState::new(3), &smaller);
        assert!(ranked[0].is_valid_guess);
    }

    #[test]
    fn ranking_is_deterministic() {
        let set = words(crate::wordlists::ENGLISH);
        let freq = FrequencyTable::from_words(&set);
        let state = constraints("", &["", "E"], "S");
        let valid = compute_valid_guesses(&set, &state);

        let first = rank_discoveries(&set, &freq, &state, &valid);
        let second = rank_discoveries(&set, &freq, &state, &valid);
        assert_eq!(first, second);
    }

    #[test]
    fn ties_keep_input_order() {
        let set = words("ABCDE,EDCBA,BCDEA");
        let freq = FrequencyTable::from_words(&set);
        let ranked = rank_discoveries(&set, &freq, &ConstraintState::new(5), &WordSet::new(5));
        let order: Vec<&str> = ranked.iter().map(|s| s.word.text()).collect();
        assert_eq!(order, vec!["ABCDE", "EDCBA", "BCDEA"]);
    }

    #[test]
    fn top_ten_truncates() {
        let set = words(crate::wordlists::ENGLISH);
        let freq = FrequencyTable::from_words(&set);
        let ranked = rank_discoveries(&set, &freq, &ConstraintState::new(5), &set);

        assert_eq!(top_ten(&ranked).len(), TOP_COUNT);
        assert_eq!(top_ten(&ranked), &ranked[..10]);
        assert!(top_ten::<ScoredWord>(&[]).is_empty());
    }
}
