//! Letterwise
//!
//! A Wordle helper built on letter frequencies: opening words that cover the
//! most common letters, follow-up words that probe the rest, and the words
//! still consistent with what earlier guesses revealed.
//!
//! # Quick Start
//!
//! ```rust
//! use letterwise::core::{ConstraintInput, ConstraintState};
//! use letterwise::solver::{Pipeline, Selection, top_ten};
//!
//! let mut pipeline = Pipeline::new(Selection::default());
//! pipeline.set_raw_dictionary("apple,anger,bread,crane,grape");
//!
//! let input = ConstraintInput { correct: " r".into(), absent: "b".into(), ..Default::default() };
//! pipeline.set_constraints(ConstraintState::from_input(5, &input).unwrap()).unwrap();
//!
//! let analysis = pipeline.analysis().unwrap();
//! assert_eq!(analysis.valid_guesses.len(), 2);
//! for scored in top_ten(&analysis.discoveries) {
//!     println!("{} {}", scored.word, scored.score);
//! }
//! ```

// Core domain types
pub mod core;

// Scoring engine and pipeline
pub mod solver;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
