//! Datamuse provider implementation
//!
//! Uses the public "means like" query of the Datamuse API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use crate::config::ProviderConfig;
use crate::error::{VanityError, Result};
use crate::words::CategoryResolver;

/// Datamuse word-association provider
pub struct DatamuseProvider {
    client: Client,
    base_url: String,
    max_results: usize,
}

impl DatamuseProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("vanity-forge/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_results: config.max_results,
        })
    }

    fn words_url(&self) -> String {
        format!("{}/words", self.base_url)
    }
}

#[async_trait]
impl CategoryResolver for DatamuseProvider {
    async fn related_words(&self, category: &str) -> Result<Vec<String>> {
        let max = self.max_results.to_string();
        let response = self
            .client
            .get(self.words_url())
            .query(&[("ml", category), ("max", max.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        check_status(status, category, &body)?;
        parse_words(&body)
    }

    fn name(&self) -> &'static str {
        "datamuse"
    }
}

// Datamuse API structures
#[derive(Deserialize)]
struct DatamuseWord {
    word: String,
}

/// Non-2xx responses become provider errors carrying the status
fn check_status(status: StatusCode, category: &str, body: &str) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    let detail = if body.trim().is_empty() {
        status.canonical_reason().unwrap_or("Unknown error")
    } else {
        body.trim()
    };
    Err(VanityError::provider(
        "datamuse",
        format!("request for '{}' failed: {}", category, detail),
        Some(status.as_u16()),
    ))
}

/// Extract the words from a Datamuse JSON response, keeping API order
fn parse_words(body: &str) -> Result<Vec<String>> {
    let entries: Vec<DatamuseWord> = serde_json::from_str(body).map_err(|e| {
        VanityError::parse(
            format!("Unexpected Datamuse response: {}", e),
            Some(body.to_string()),
        )
    })?;
    Ok(entries.into_iter().map(|e| e.word).collect())
}
