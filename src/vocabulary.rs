use std::collections::HashSet;

/// Split word-list text into tokens: one per line, surrounding whitespace
/// trimmed, blank lines skipped.
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Known-correct tokens, unique, in first-seen order.
///
/// The order is what breaks ties between equally similar suggestions, so
/// merging sources keeps the first occurrence of each word where it was.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge several word lists in order, dropping repeats.
    pub fn from_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = String>,
    {
        let mut vocabulary = Self::new();
        for source in sources {
            vocabulary.extend(source);
        }
        vocabulary
    }

    /// Returns `false` when the word was already present.
    pub fn insert(&mut self, word: String) -> bool {
        if self.index.contains(&word) {
            return false;
        }
        self.index.insert(word.clone());
        self.words.push(word);
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }
}

impl Extend<String> for Vocabulary {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl FromIterator<String> for Vocabulary {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut vocabulary = Self::new();
        vocabulary.extend(iter);
        vocabulary
    }
}

impl<'a> FromIterator<&'a str> for Vocabulary {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        iter.into_iter().map(str::to_owned).collect()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_word_list_skips_blank_lines() {
        let words = parse_word_list("كتاب\n\n  كتب  \r\n\t\nقلم");
        assert_eq!(words, vec!["كتاب", "كتب", "قلم"]);
    }

    #[test]
    fn test_merge_keeps_first_seen_order() {
        let reference = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        let user = vec!["c".to_string(), "a".to_string()];
        let vocabulary = Vocabulary::from_sources([reference, user]);
        assert_eq!(vocabulary.words(), ["b", "a", "c"]);
        assert_eq!(vocabulary.len(), 3);
    }

    #[test]
    fn test_contains_is_exact() {
        let vocabulary: Vocabulary = ["كتاب", "Book"].into_iter().collect();
        assert!(vocabulary.contains("كتاب"));
        assert!(!vocabulary.contains("book"));
        assert!(!vocabulary.contains("كتا"));
    }

    #[test]
    fn test_insert_reports_duplicates() {
        let mut vocabulary = Vocabulary::new();
        assert!(vocabulary.is_empty());
        assert!(vocabulary.insert("جديد".to_string()));
        assert!(!vocabulary.insert("جديد".to_string()));
        assert_eq!(vocabulary.len(), 1);
    }
}
