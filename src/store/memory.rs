//! In-process caller store

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::Result;
use crate::store::CallerStore;
use crate::types::CallerRecord;

/// Caller records held in memory; lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, CallerRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record directly
    pub fn insert(&self, record: CallerRecord) {
        self.records
            .write()
            .insert(record.caller_number.clone(), record);
    }

    /// Snapshot of a stored record
    pub fn get(&self, caller_number: &str) -> Option<CallerRecord> {
        self.records.read().get(caller_number).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl CallerStore for MemoryStore {
    async fn load(&self, caller_number: &str) -> Result<Option<CallerRecord>> {
        Ok(self.get(caller_number))
    }

    async fn save(&self, record: &CallerRecord) -> Result<()> {
        self.insert(record.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_and_replace() {
        tokio_test::block_on(async {
            let store = MemoryStore::new();
            assert!(store.load("555").await.unwrap().is_none());

            let record = CallerRecord::new("555");
            store.save(&record).await.unwrap();
            assert_eq!(store.load("555").await.unwrap(), Some(record.clone()));

            store.save(&record).await.unwrap();
            assert_eq!(store.len(), 1);
        });
    }
}
