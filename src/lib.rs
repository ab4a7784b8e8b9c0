//! Word-list spell checking with fuzzy suggestions.
//!
//! Words are looked up exactly in a vocabulary built from a reference list
//! and a user list; unknown words get the closest vocabulary entries by
//! [`similarity()`] as suggestions.

pub mod config;
pub mod error;
pub mod similarity;
pub mod spellcheck;
pub mod store;
pub mod suggest;
pub mod vocabulary;

pub use config::CheckerConfig;
pub use error::SpellError;
pub use similarity::similarity;
pub use spellcheck::{AddOutcome, CheckReport, Misspelling, SpellChecker, Stats};
pub use store::{FileWordStore, MemoryWordStore, StoreError, WordStore};
pub use suggest::{Match, suggest};
pub use vocabulary::Vocabulary;
