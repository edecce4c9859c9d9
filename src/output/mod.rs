//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_frequencies, print_header, print_report, print_start_words, print_suggestions,
};
