//! Durable per-caller result storage

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::CallerRecord;

/// Keyed store of caller records
#[async_trait]
pub trait CallerStore: Send + Sync {
    /// Fetch the record for `caller_number`, `None` if it was never written
    async fn load(&self, caller_number: &str) -> Result<Option<CallerRecord>>;

    /// Replace the stored record for `record.caller_number`
    async fn save(&self, record: &CallerRecord) -> Result<()>;

    /// Get the store name
    fn name(&self) -> &'static str;
}
