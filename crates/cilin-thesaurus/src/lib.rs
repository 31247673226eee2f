//! # cilin-thesaurus
//!
//! Parses a line-oriented synonym thesaurus (`<code> <word> <word> ...`) into an
//! immutable word → semantic-code lookup. Loading happens once; the result is
//! read-only and can be shared freely.

pub mod loader;
pub mod thesaurus;

pub use loader::{load_or_empty, LoadOutcome, LoadReport, ThesaurusLoader, ThesaurusStatus};
pub use thesaurus::Thesaurus;
