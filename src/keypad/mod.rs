//! Keypad layout and phone digit normalization.

pub mod table;

pub use table::{allows, digit_for, letters_for};

use std::fmt;

/// Digits kept from a phone number (national-number convention)
pub const SIGNIFICANT_DIGITS: usize = 10;

/// Placeholder used when an invocation carries no phone number
pub const PLACEHOLDER_NUMBER: &str = "+10000000000";

/// The significant digits of a phone number, `'0'..='9'` only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitString(String);

impl DigitString {
    /// Strip punctuation and keep the last ten digits.
    pub fn from_phone(raw: &str) -> Self {
        let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
        let start = digits.len().saturating_sub(SIGNIFICANT_DIGITS);
        Self(digits[start..].iter().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Spell a word into digits, e.g. `FACT` -> `3228`.
    ///
    /// Returns `None` when any character is off the keypad.
    pub fn spell(word: &str) -> Option<Self> {
        word.chars()
            .map(|c| digit_for(c.to_ascii_uppercase()))
            .collect::<Option<String>>()
            .map(Self)
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
