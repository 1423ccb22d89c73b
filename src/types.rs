//! Core types and structures for vanity-forge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation_error;

/// Category used when an invocation names none
pub const DEFAULT_CATEGORY: &str = "general";

/// A single vanity rendering of a phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VanityMatch {
    /// Leading digits space-separated, then the matched word, e.g. `8 0 0 9 4 5 FACT`
    pub vanity: String,
    /// Length of the matched word; the only ranking key
    pub length: usize,
    /// Category whose search found this match, `None` for fallback-only
    #[serde(default)]
    pub from_category: Option<String>,
}

impl VanityMatch {
    pub fn new(vanity: impl Into<String>, length: usize, from_category: Option<String>) -> Self {
        Self {
            vanity: vanity.into(),
            length,
            from_category,
        }
    }

    /// Whether a category search has ever produced this match
    pub fn has_category(&self) -> bool {
        self.from_category.is_some()
    }
}

/// One entry of a caller's query log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryEntry {
    pub from_category: String,
    pub query_date: DateTime<Utc>,
}

/// Persistent per-caller record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerRecord {
    pub caller_number: String,
    pub created_at: DateTime<Utc>,
    /// Ranked, unique by `vanity`
    #[serde(default)]
    pub top_results: Vec<VanityMatch>,
    /// At most one entry per category
    #[serde(default)]
    pub previous_queries: Vec<QueryEntry>,
}

impl CallerRecord {
    /// Create an empty record for a first-time caller
    pub fn new(caller_number: impl Into<String>) -> Self {
        Self {
            caller_number: caller_number.into(),
            created_at: Utc::now(),
            top_results: Vec::new(),
            previous_queries: Vec::new(),
        }
    }
}

/// Tunables for word filtering and matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Matches collected per matcher pass before the scan stops
    pub result_cap: usize,
    pub min_word_length: usize,
    pub max_word_length: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            result_cap: 5,
            min_word_length: 3,
            max_word_length: 7,
        }
    }
}

impl MatchConfig {
    /// Reject settings that would make every search empty or ill-defined
    pub fn validate(&self) -> Result<()> {
        if self.result_cap == 0 {
            return Err(validation_error!("result cap must be at least 1"));
        }
        if self.min_word_length == 0 {
            return Err(validation_error!("minimum word length must be at least 1"));
        }
        if self.min_word_length > self.max_word_length {
            return Err(validation_error!(
                "minimum word length {} exceeds maximum {}",
                self.min_word_length,
                self.max_word_length
            ));
        }
        Ok(())
    }
}

/// Result of a searching invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutput {
    pub top_result1: String,
    pub top_result2: String,
    pub top_result3: String,
    pub has_vanity_results: bool,
    pub used_fallback: bool,
}

impl SearchOutput {
    /// Fill the result slots from a ranked list
    pub fn from_ranked(ranked: &[VanityMatch], used_fallback: bool) -> Self {
        let slot = |i: usize| ranked.get(i).map(|m| m.vanity.clone()).unwrap_or_default();
        Self {
            top_result1: slot(0),
            top_result2: slot(1),
            top_result3: slot(2),
            has_vanity_results: !ranked.is_empty(),
            used_fallback,
        }
    }

    /// Non-empty result slots in order
    pub fn results(&self) -> Vec<&str> {
        [&self.top_result1, &self.top_result2, &self.top_result3]
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(String::as_str)
            .collect()
    }
}

/// Result of a validating invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutput {
    pub previous_top_result: String,
}

/// What an invocation returns to its caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvocationOutput {
    Search(SearchOutput),
    Validation(ValidationOutput),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_config_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.result_cap, 5);
        assert_eq!(config.min_word_length, 3);
        assert_eq!(config.max_word_length, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_match_config_rejects_inverted_window() {
        let config = MatchConfig {
            min_word_length: 8,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = MatchConfig {
            result_cap: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_vanity_match_serializes_camel_case() {
        let m = VanityMatch::new("PETS", 4, Some("pet".to_string()));
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["vanity"], "PETS");
        assert_eq!(json["length"], 4);
        assert_eq!(json["fromCategory"], "pet");

        let fallback = VanityMatch::new("PETS", 4, None);
        let json = serde_json::to_value(&fallback).unwrap();
        assert!(json["fromCategory"].is_null());
    }

    #[test]
    fn test_caller_record_tolerates_missing_lists() {
        let raw = r#"{"callerNumber":"+15551234567","createdAt":"2024-01-01T00:00:00Z"}"#;
        let record: CallerRecord = serde_json::from_str(raw).unwrap();
        assert!(record.top_results.is_empty());
        assert!(record.previous_queries.is_empty());
    }

    #[test]
    fn test_search_output_slots() {
        let ranked = vec![
            VanityMatch::new("8 0 0 9 4 5 FACT", 4, None),
            VanityMatch::new("8 0 0 9 4 5 3 CAT", 3, None),
        ];
        let out = SearchOutput::from_ranked(&ranked, true);
        assert_eq!(out.top_result1, "8 0 0 9 4 5 FACT");
        assert_eq!(out.top_result3, "");
        assert!(out.has_vanity_results);
        assert_eq!(out.results().len(), 2);

        let json = serde_json::to_value(InvocationOutput::Search(out)).unwrap();
        assert_eq!(json["topResult2"], "8 0 0 9 4 5 3 CAT");
        assert_eq!(json["usedFallback"], true);
    }

    #[test]
    fn test_empty_search_output() {
        let out = SearchOutput::from_ranked(&[], false);
        assert!(!out.has_vanity_results);
        assert!(out.results().is_empty());
    }
}
