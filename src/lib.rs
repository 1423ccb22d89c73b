//! Vanity Forge - vanity phone numbers from dictionary and category words
//!
//! Matches words against the trailing digits of a phone number using the
//! standard keypad layout, and accumulates ranked results per caller.

pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod keypad;
pub mod logging;
pub mod service;
pub mod store;
pub mod types;
pub mod words;

// Re-export commonly used types
pub use config::{ProviderConfig, ProviderKind, ServiceConfig};
pub use error::{Result, VanityError};
pub use event::VanityRequest;
pub use keypad::DigitString;
pub use types::{
    CallerRecord, InvocationOutput, MatchConfig, QueryEntry, SearchOutput, ValidationOutput,
    VanityMatch,
};

// Re-export main functionality
pub use service::VanityService;
pub use store::{CallerStore, JsonFileStore, MemoryStore};
pub use words::{CategoryResolver, Dictionary, StaticProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
