use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum SpellError {
    /// The reference list could not be read; checking is skipped.
    #[error("no dictionary available: {0}")]
    VocabularyUnavailable(#[source] StoreError),
    /// Every list loaded but none of them had a single word.
    #[error("no dictionary available: the word lists are empty")]
    EmptyVocabulary,
    #[error("please enter a word or sentence first")]
    EmptyInput,
    #[error("'{0}' is not a single word")]
    InvalidWord(String),
    #[error("too many words to check at once ({count}, the limit is {max})")]
    TooManyTokens { count: usize, max: usize },
    #[error("failed to save to {target}: {source}")]
    WriteFailure {
        target: String,
        #[source]
        source: StoreError,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SpellError {
    /// True for the errors that mean "there is nothing to check against".
    pub fn is_vocabulary_unavailable(&self) -> bool {
        matches!(
            self,
            SpellError::VocabularyUnavailable(_) | SpellError::EmptyVocabulary
        )
    }
}
