//! Letter statistics, constraint filtering and word ranking
//!
//! This module contains the scoring engine and the pipeline that drives it.

mod discovery;
mod engine;
mod filter;
mod frequency;
mod scoring;

pub use discovery::{
    TOP_COUNT, VALID_GUESS_LIMIT, boost_multiplier, boosted_score, rank_discoveries, top_ten,
};
pub use engine::{Analysis, DEFAULT_WORD_LENGTH, Pipeline, Selection};
pub use filter::{compute_valid_guesses, filter, is_consistent, satisfies};
pub use frequency::{FrequencyTable, compute_frequencies};
pub use scoring::{
    SECOND_DISCOVERY_EXCLUDED, ScoredWord, rank_by_score, rank_second_discovery_words,
    rank_start_words, score, second_discovery_forbidden,
};
