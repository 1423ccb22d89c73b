//! Candidate word sources
//!
//! Category words come from a word-association provider; fallback words come
//! from a static dictionary loaded once per process.

pub mod dictionary;
pub mod providers;

pub use dictionary::Dictionary;
pub use providers::StaticProvider;
#[cfg(feature = "datamuse")]
pub use providers::DatamuseProvider;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{ProviderConfig, ProviderKind};
use crate::engine::WordFilter;
use crate::error::Result;

/// Source of words associated with a category
#[async_trait]
pub trait CategoryResolver: Send + Sync {
    /// Words related to `category`, most relevant first
    async fn related_words(&self, category: &str) -> Result<Vec<String>>;

    /// Get provider name
    fn name(&self) -> &'static str;
}

/// Get available provider names
pub fn available_providers() -> Vec<&'static str> {
    let mut names = vec!["none"];
    if cfg!(feature = "datamuse") {
        names.push("datamuse");
    }
    names
}

/// Create a category resolver from configuration
pub fn create_resolver(config: &ProviderConfig) -> Result<Arc<dyn CategoryResolver>> {
    match config.kind {
        #[cfg(feature = "datamuse")]
        ProviderKind::Datamuse => Ok(Arc::new(DatamuseProvider::new(config)?)),
        #[cfg(not(feature = "datamuse"))]
        ProviderKind::Datamuse => Err(crate::error::VanityError::config(
            "Datamuse support was not compiled in; set WORD_PROVIDER=none",
        )),
        ProviderKind::None => Ok(Arc::new(StaticProvider::new())),
    }
}

/// Category candidates for one invocation.
///
/// The uppercased category leads, followed by the admissible provider words,
/// repeats removed. A provider failure is logged and yields no candidates.
pub async fn category_candidates(
    resolver: &dyn CategoryResolver,
    category: &str,
    filter: &WordFilter,
) -> Vec<String> {
    let related = match resolver.related_words(category).await {
        Ok(words) => words,
        Err(e) => {
            tracing::warn!(
                provider = resolver.name(),
                category = %category,
                error = %e,
                "Word provider failed, continuing without category words"
            );
            return Vec::new();
        }
    };

    let mut candidates = Vec::with_capacity(related.len() + 1);
    candidates.push(category.to_uppercase());
    for word in filter.filter(related) {
        if !candidates.contains(&word) {
            candidates.push(word);
        }
    }

    tracing::debug!(
        provider = resolver.name(),
        category = %category,
        candidates = candidates.len(),
        "Category candidates resolved"
    );
    candidates
}
