//! Word admission filter for candidate lists

use regex::Regex;

use crate::error::{Result, VanityError};
use crate::types::MatchConfig;

/// Normalizes raw words to the admissible alphabet and length window.
///
/// Entries are uppercased; only `^[A-Z]+$` words whose length falls inside
/// `[min_word_length, max_word_length]` survive, in their original order.
#[derive(Debug, Clone)]
pub struct WordFilter {
    pattern: Regex,
    min_len: usize,
    max_len: usize,
}

impl WordFilter {
    pub fn new(config: &MatchConfig) -> Result<Self> {
        let pattern = Regex::new(r"^[A-Z]+$").map_err(|e| VanityError::internal(e.to_string()))?;
        Ok(Self {
            pattern,
            min_len: config.min_word_length,
            max_len: config.max_word_length,
        })
    }

    /// Uppercase form of `word` if it is admissible
    pub fn admit(&self, word: &str) -> Option<String> {
        let upper = word.to_uppercase();
        let len = upper.len();
        if len < self.min_len || len > self.max_len || !self.pattern.is_match(&upper) {
            return None;
        }
        Some(upper)
    }

    /// Filter a raw word list, preserving relative order
    pub fn filter<I, S>(&self, raw_words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw_words
            .into_iter()
            .filter_map(|w| self.admit(w.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> WordFilter {
        WordFilter::new(&MatchConfig::default()).unwrap()
    }

    #[test]
    fn test_uppercases_and_keeps_order() {
        let words = filter().filter(["pets", "Cat", "dog"]);
        assert_eq!(words, vec!["PETS", "CAT", "DOG"]);
    }

    #[test]
    fn test_length_window() {
        let words = filter().filter(["at", "cat", "catalog", "catalogs"]);
        assert_eq!(words, vec!["CAT", "CATALOG"]);
    }

    #[test]
    fn test_rejects_non_letters() {
        let words = filter().filter(["don't", "ice cream", "abc1", "", "café", "  "]);
        assert!(words.is_empty());
    }

    #[test]
    fn test_custom_window() {
        let config = MatchConfig {
            min_word_length: 4,
            max_word_length: 4,
            ..Default::default()
        };
        let filter = WordFilter::new(&config).unwrap();
        assert_eq!(filter.filter(vec!["cat".to_string(), "fact".to_string()]), vec!["FACT"]);
    }
}
