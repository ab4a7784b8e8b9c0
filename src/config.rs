use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SpellError;

pub const DEFAULT_CUTOFF: f64 = 0.6;
pub const DEFAULT_LIMIT: usize = 2;
pub const DEFAULT_MAX_TOKENS: usize = 256;

/// Where the word lists live and how suggestions are picked.
///
/// Every field is optional in a JSON config file; missing ones keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckerConfig {
    pub dictionary: PathBuf,
    pub user_dictionary: PathBuf,
    pub history: PathBuf,
    /// Minimum similarity for a suggestion, in `[0, 1]`.
    pub cutoff: f64,
    /// Suggestions per misspelled word.
    pub limit: usize,
    /// Words accepted in a single check.
    pub max_tokens: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from("arabic_words.txt"),
            user_dictionary: PathBuf::from("user_dictionary.txt"),
            history: PathBuf::from("spelling_history.txt"),
            cutoff: DEFAULT_CUTOFF,
            limit: DEFAULT_LIMIT,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl CheckerConfig {
    pub fn from_json(content: &str) -> Result<Self, SpellError> {
        let config: CheckerConfig =
            serde_json::from_str(content).map_err(|e| SpellError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, SpellError> {
        let content = fs::read_to_string(path)
            .map_err(|e| SpellError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<(), SpellError> {
        if !(0.0..=1.0).contains(&self.cutoff) {
            return Err(SpellError::Config(format!(
                "cutoff must be between 0 and 1, got {}",
                self.cutoff
            )));
        }
        if self.max_tokens == 0 {
            return Err(SpellError::Config(
                "max_tokens must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
