use std::collections::HashMap;
use std::fmt;
use std::time::Instant;

use log::{debug, warn};
use serde::Serialize;

use crate::config::{CheckerConfig, DEFAULT_CUTOFF, DEFAULT_LIMIT, DEFAULT_MAX_TOKENS};
use crate::error::SpellError;
use crate::store::{FileWordStore, StoreError, WordStore};
use crate::suggest::{Match, suggest};
use crate::vocabulary::Vocabulary;

/// Running totals across checks. Owned by the caller for as long as its
/// session lasts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: u64,
    pub correct: u64,
    pub incorrect: u64,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, report: &CheckReport) {
        self.total += report.tokens.len() as u64;
        self.correct += report.correct as u64;
        self.incorrect += report.incorrect.len() as u64;
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Words checked: {}", self.total)?;
        writeln!(f, "- Correct words: {}", self.correct)?;
        write!(f, "- Errors: {}", self.incorrect)
    }
}

/// A word that is not in the vocabulary, with whatever was close to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Misspelling {
    pub word: String,
    pub suggestions: Vec<Match>,
}

/// Outcome of checking one piece of text.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub tokens: Vec<String>,
    pub correct: usize,
    /// One entry per misspelled occurrence, in input order.
    pub incorrect: Vec<Misspelling>,
    /// Set when the input could not be written to the history log.
    #[serde(skip)]
    pub history_failure: Option<SpellError>,
}

impl CheckReport {
    pub fn all_correct(&self) -> bool {
        self.incorrect.is_empty()
    }

    pub fn suggestions_for(&self, word: &str) -> Option<&[Match]> {
        self.incorrect
            .iter()
            .find(|m| m.word == word)
            .map(|m| m.suggestions.as_slice())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyKnown,
}

/// Checks text against a reference word list plus a user word list,
/// suggesting close words for anything unknown.
///
/// The vocabulary is read from the stores on every call, so words added
/// through [`SpellChecker::add_word`] count from the next check on.
pub struct SpellChecker {
    reference: Box<dyn WordStore>,
    user: Box<dyn WordStore>,
    history: Box<dyn WordStore>,
    cutoff: f64,
    limit: usize,
    max_tokens: usize,
}

impl SpellChecker {
    pub fn new(
        reference: Box<dyn WordStore>,
        user: Box<dyn WordStore>,
        history: Box<dyn WordStore>,
    ) -> Self {
        SpellChecker {
            reference,
            user,
            history,
            cutoff: DEFAULT_CUTOFF,
            limit: DEFAULT_LIMIT,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// File-backed checker. The user list is created empty when missing.
    pub fn from_config(config: &CheckerConfig) -> Result<Self, SpellError> {
        config.validate()?;

        let user = FileWordStore::new(&config.user_dictionary);
        if let Err(e) = user.ensure_exists() {
            warn!("failed to create user dictionary: {e}");
        }

        Ok(Self::new(
            Box::new(FileWordStore::new(&config.dictionary)),
            Box::new(user),
            Box::new(FileWordStore::new(&config.history)),
        )
        .with_cutoff(config.cutoff)
        .with_limit(config.limit)
        .with_max_tokens(config.max_tokens))
    }

    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Reference words first, then user words, without repeats.
    pub fn load_vocabulary(&self) -> Result<Vocabulary, SpellError> {
        let reference = self
            .reference
            .load()
            .map_err(SpellError::VocabularyUnavailable)?;
        let user = self.load_user_words();

        let vocabulary = Vocabulary::from_sources([reference, user]);
        if vocabulary.is_empty() {
            return Err(SpellError::EmptyVocabulary);
        }
        debug!("loaded {} dictionary words", vocabulary.len());
        Ok(vocabulary)
    }

    fn load_user_words(&self) -> Vec<String> {
        match self.user.load() {
            Ok(words) => words,
            Err(StoreError::NotFound { .. }) => Vec::new(),
            Err(e) => {
                warn!("error reading user dictionary: {e}");
                Vec::new()
            }
        }
    }

    /// Exact membership. An unavailable dictionary counts as "not there".
    pub fn check_exists(&self, word: &str) -> bool {
        match self.load_vocabulary() {
            Ok(vocabulary) => vocabulary.contains(word),
            Err(e) => {
                warn!("cannot check '{word}': {e}");
                false
            }
        }
    }

    /// Suggestions for a single word with the configured cutoff and limit.
    pub fn suggestions_for(&self, word: &str) -> Result<Vec<Match>, SpellError> {
        let vocabulary = self.load_vocabulary()?;
        Ok(suggest(word, &vocabulary, self.cutoff, self.limit))
    }

    /// Check every whitespace-separated word of `text` and fold the outcome
    /// into `stats`.
    pub fn check(&self, text: &str, stats: &mut Stats) -> Result<CheckReport, SpellError> {
        if text.trim().is_empty() {
            return Err(SpellError::EmptyInput);
        }

        let history_failure = self.record_history(text).err();

        let tokens: Vec<String> = text.split_whitespace().map(str::to_owned).collect();
        if tokens.len() > self.max_tokens {
            return Err(SpellError::TooManyTokens {
                count: tokens.len(),
                max: self.max_tokens,
            });
        }

        let vocabulary = self.load_vocabulary()?;

        let start_time = Instant::now();
        let mut correct = 0;
        let mut incorrect = Vec::new();
        let mut seen: HashMap<&str, Vec<Match>> = HashMap::new();
        for token in &tokens {
            if vocabulary.contains(token) {
                correct += 1;
                continue;
            }
            let suggestions = seen
                .entry(token.as_str())
                .or_insert_with(|| suggest(token, &vocabulary, self.cutoff, self.limit))
                .clone();
            incorrect.push(Misspelling {
                word: token.clone(),
                suggestions,
            });
        }
        debug!(
            "checked {} words against {} in {:?}",
            tokens.len(),
            vocabulary.len(),
            start_time.elapsed()
        );

        let report = CheckReport {
            tokens,
            correct,
            incorrect,
            history_failure,
        };
        stats.record(&report);
        Ok(report)
    }

    /// Append a word to the user list unless it is already known.
    pub fn add_word(&self, word: &str) -> Result<AddOutcome, SpellError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(SpellError::EmptyInput);
        }
        if word.contains(char::is_whitespace) {
            return Err(SpellError::InvalidWord(word.to_string()));
        }

        let mut known = self.reference.load().unwrap_or_default();
        known.extend(self.load_user_words());
        if known.iter().any(|w| w == word) {
            return Ok(AddOutcome::AlreadyKnown);
        }

        self.user
            .append(word)
            .map_err(|source| SpellError::WriteFailure {
                target: self.user.describe(),
                source,
            })?;
        debug!("added '{word}' to {}", self.user.describe());
        Ok(AddOutcome::Added)
    }

    fn record_history(&self, text: &str) -> Result<(), SpellError> {
        self.history.append(text).map_err(|source| {
            warn!("error saving history: {source}");
            SpellError::WriteFailure {
                target: self.history.describe(),
                source,
            }
        })
    }
}
