//! Per-caller log of which categories were queried and when

use chrono::{DateTime, Utc};

use crate::types::QueryEntry;

/// Append `category` stamped `now` unless it is already logged.
///
/// Existing entries, including their dates, are never touched.
pub fn record_query_at(
    existing: &[QueryEntry],
    category: &str,
    now: DateTime<Utc>,
) -> Vec<QueryEntry> {
    let mut queries = existing.to_vec();
    if existing.iter().all(|q| q.from_category != category) {
        queries.push(QueryEntry {
            from_category: category.to_string(),
            query_date: now,
        });
    }
    queries
}

/// [`record_query_at`] with the current time
pub fn record_query(existing: &[QueryEntry], category: &str) -> Vec<QueryEntry> {
    record_query_at(existing, category, Utc::now())
}
