//! In-memory provider for offline runs and tests

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::Result;
use crate::words::CategoryResolver;

/// Provider backed by a fixed category -> words table.
///
/// Unknown categories resolve to no words.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    categories: HashMap<String, Vec<String>>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the words returned for `category` (matched case-insensitively)
    pub fn with_category<I, S>(mut self, category: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.insert(
            category.to_lowercase(),
            words.into_iter().map(Into::into).collect(),
        );
        self
    }
}

#[async_trait]
impl CategoryResolver for StaticProvider {
    async fn related_words(&self, category: &str) -> Result<Vec<String>> {
        Ok(self
            .categories
            .get(&category.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
