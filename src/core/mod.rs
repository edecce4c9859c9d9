//! Core domain types
//!
//! Words, alphabets, guess feedback and accumulated constraints. Everything
//! here is pure and cheap to clone.

mod constraints;
mod feedback;
mod language;
mod word;
mod word_set;

pub use constraints::{ConstraintError, ConstraintInput, ConstraintState};
pub use feedback::{Feedback, Mark};
pub use language::Language;
pub use word::{Word, WordError, canonical_letter};
pub use word_set::WordSet;
