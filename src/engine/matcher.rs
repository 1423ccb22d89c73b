//! Keypad-constrained suffix matcher

use crate::keypad::{self, DigitString};
use crate::types::{MatchConfig, VanityMatch};

/// Finds words spelled by the trailing digits of a number.
///
/// The scan is first-K in candidate order: once `result_cap` matches are
/// collected, later candidates are never looked at.
#[derive(Debug, Clone, Copy)]
pub struct VanityMatcher {
    result_cap: usize,
}

impl VanityMatcher {
    pub fn new(config: &MatchConfig) -> Self {
        Self::with_cap(config.result_cap)
    }

    pub fn with_cap(result_cap: usize) -> Self {
        Self { result_cap }
    }

    pub fn result_cap(&self) -> usize {
        self.result_cap
    }

    /// Collect up to `result_cap` matches in scan order, tagged with `category`.
    pub fn find_matches<S: AsRef<str>>(
        &self,
        digits: &DigitString,
        words: &[S],
        category: Option<&str>,
    ) -> Vec<VanityMatch> {
        let mut matches = Vec::new();
        if self.result_cap == 0 {
            return matches;
        }

        for word in words {
            let word = word.as_ref();
            if let Some(vanity) = render(digits, word) {
                matches.push(VanityMatch::new(
                    vanity,
                    word.len(),
                    category.map(str::to_string),
                ));
                if matches.len() >= self.result_cap {
                    break;
                }
            }
        }

        tracing::debug!(
            digits = %digits,
            category = category.unwrap_or("-"),
            candidates = words.len(),
            matches = matches.len(),
            "Matcher pass completed"
        );
        matches
    }

    /// Standalone use: matches ranked by word length, ties kept in scan order.
    pub fn find_ranked<S: AsRef<str>>(&self, digits: &DigitString, words: &[S]) -> Vec<VanityMatch> {
        let mut matches = self.find_matches(digits, words, None);
        sort_by_length(&mut matches);
        matches
    }
}

/// Stable sort, longest word first
pub fn sort_by_length(matches: &mut [VanityMatch]) {
    matches.sort_by(|a, b| b.length.cmp(&a.length));
}

/// The string `word` renders to over the tail of `digits`, ignoring the keypad.
///
/// `None` when the word is empty or longer than the number.
pub fn layout(digits: &DigitString, word: &str) -> Option<String> {
    let digits = digits.as_str();
    let start = digits.len().checked_sub(word.len())?;
    if word.is_empty() {
        return None;
    }

    let word = word.to_ascii_uppercase();
    if start == 0 {
        return Some(word);
    }
    let leading: Vec<String> = digits[..start].chars().map(String::from).collect();
    Some(format!("{} {}", leading.join(" "), word))
}

/// Render `word` over the tail of `digits`, or `None` if the keypad disagrees.
fn render(digits: &DigitString, word: &str) -> Option<String> {
    let start = digits.len().checked_sub(word.len())?;
    let fits = digits.as_str()[start..]
        .chars()
        .zip(word.chars())
        .all(|(digit, letter)| keypad::allows(digit, letter.to_ascii_uppercase()));
    if !fits {
        return None;
    }
    layout(digits, word)
}
