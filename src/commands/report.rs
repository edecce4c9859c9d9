//! Report command
//!
//! Builds the display-ready summary: letter frequencies, opening words,
//! second exploration words, remaining answers and discovery ranking.

use crate::core::{ConstraintInput, ConstraintState, Feedback, Word};
use crate::solver::{Pipeline, ScoredWord, Selection, top_ten};

/// Constraint sources for a report
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    pub selection: Selection,
    pub input: ConstraintInput,
    /// `GUESS=MARKS` entries, e.g. `crane=-G-Y-`
    pub feedback: Vec<String>,
}

/// Result of analysing a dictionary under constraints
#[derive(Debug, Clone)]
pub struct Report {
    pub selection: Selection,
    pub relevant_words: usize,
    pub frequency_list: Vec<(char, usize)>,
    pub start_words: Vec<ScoredWord>,
    pub second_discovery_words: Vec<ScoredWord>,
    pub valid_guesses: Vec<Word>,
    pub valid_guess_count: usize,
    pub discoveries: Vec<ScoredWord>,
    pub contradictions: Vec<char>,
}

/// Parse a `GUESS=MARKS` feedback entry
///
/// # Errors
///
/// Returns an error if the entry has no `=`, the guess is not a valid word
/// for `selection`, or the marks cannot be parsed.
pub fn parse_feedback_entry(entry: &str, selection: Selection) -> Result<(Word, Feedback), String> {
    let (guess, marks) = entry
        .split_once('=')
        .ok_or_else(|| format!("Feedback '{entry}' must look like GUESS=MARKS"))?;

    let word = Word::new(guess.trim(), selection.length, |c| selection.language.contains(c))
        .map_err(|e| format!("Invalid guess '{guess}': {e}"))?;
    let feedback = marks.parse::<Feedback>()?;

    Ok((word, feedback))
}

/// Combine explicit constraints with guess feedback
///
/// # Errors
///
/// Returns an error if the explicit input does not fit the word length, a
/// feedback entry is malformed, or feedback conflicts with known letters.
pub fn build_constraints(config: &ReportConfig) -> Result<ConstraintState, String> {
    let length = config.selection.length;
    let mut state = ConstraintState::from_input(length, &config.input).map_err(|e| e.to_string())?;

    for entry in &config.feedback {
        let (guess, feedback) = parse_feedback_entry(entry, config.selection)?;
        state
            .apply_feedback(&guess, &feedback)
            .map_err(|e| format!("Feedback '{entry}': {e}"))?;
        log::debug!("Applied feedback {guess} {feedback}");
    }

    Ok(state)
}

/// Run the pipeline and keep the top of each ranking
///
/// # Errors
///
/// Returns an error if the constraints cannot be built or do not match the
/// pipeline's word length.
pub fn build_report(pipeline: &mut Pipeline, config: &ReportConfig) -> Result<Report, String> {
    pipeline.set_selection(config.selection);
    let constraints = build_constraints(config)?;
    let contradictions = constraints.contradictions();
    pipeline
        .set_constraints(constraints)
        .map_err(|e| e.to_string())?;

    let analysis = pipeline.analysis().map_err(|e| e.to_string())?;

    Ok(Report {
        selection: config.selection,
        relevant_words: analysis.relevant_words,
        frequency_list: analysis.frequency_list,
        start_words: top_ten(&analysis.start_words).to_vec(),
        second_discovery_words: top_ten(&analysis.second_discovery_words).to_vec(),
        valid_guesses: top_ten(analysis.valid_guesses.as_slice()).to_vec(),
        valid_guess_count: analysis.valid_guesses.len(),
        discoveries: top_ten(&analysis.discoveries).to_vec(),
        contradictions,
    })
}
