//! Environment-driven configuration

use std::path::PathBuf;
use std::str::FromStr;

use crate::config_error;
use crate::error::Result;
use crate::types::MatchConfig;

/// Default directory of the JSON caller store
pub const DEFAULT_STORE_DIR: &str = "output/callers";

/// Which word-association provider to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Datamuse,
    /// No provider; every category yields no related words
    None,
}

impl FromStr for ProviderKind {
    type Err = crate::error::VanityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "datamuse" => Ok(Self::Datamuse),
            "none" | "off" | "offline" => Ok(Self::None),
            other => Err(config_error!(
                "Unsupported word provider: {}. Supported providers: {}",
                other,
                crate::words::available_providers().join(", ")
            )),
        }
    }
}

/// Word provider settings
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub base_url: String,
    pub max_results: usize,
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::Datamuse,
            base_url: "https://api.datamuse.com".to_string(),
            max_results: 1000,
            timeout_secs: 10,
        }
    }
}

/// Everything the binary needs to build a service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub matching: MatchConfig,
    pub dictionary_path: Option<PathBuf>,
    pub store_dir: PathBuf,
    pub provider: ProviderConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            matching: MatchConfig::default(),
            dictionary_path: None,
            store_dir: PathBuf::from(DEFAULT_STORE_DIR),
            provider: ProviderConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unset or blank keys keep defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(v) = get("VANITY_RESULT_CAP") {
            config.matching.result_cap = parse_number("VANITY_RESULT_CAP", &v)?;
        }
        if let Some(v) = get("VANITY_MIN_WORD_LENGTH") {
            config.matching.min_word_length = parse_number("VANITY_MIN_WORD_LENGTH", &v)?;
        }
        if let Some(v) = get("VANITY_MAX_WORD_LENGTH") {
            config.matching.max_word_length = parse_number("VANITY_MAX_WORD_LENGTH", &v)?;
        }
        config
            .matching
            .validate()
            .map_err(|e| config_error!("{}", e))?;

        config.dictionary_path = get("VANITY_DICTIONARY_PATH").map(PathBuf::from);
        if let Some(v) = get("VANITY_STORE_DIR") {
            config.store_dir = PathBuf::from(v);
        }

        if let Some(v) = get("WORD_PROVIDER") {
            config.provider.kind = v.parse()?;
        }
        if let Some(v) = get("WORD_PROVIDER_URL") {
            config.provider.base_url = v;
        }
        if let Some(v) = get("WORD_PROVIDER_MAX") {
            config.provider.max_results = parse_number("WORD_PROVIDER_MAX", &v)?;
        }
        if let Some(v) = get("WORD_PROVIDER_TIMEOUT_SECS") {
            config.provider.timeout_secs = parse_number("WORD_PROVIDER_TIMEOUT_SECS", &v)?;
        }

        Ok(config)
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| config_error!("{} must be a non-negative integer, got '{}'", key, value))
}
