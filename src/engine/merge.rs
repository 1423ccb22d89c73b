//! Folding new matches into a caller's stored results

use std::collections::HashMap;

use crate::engine::matcher::sort_by_length;
use crate::types::VanityMatch;

/// Merge `incoming` into `existing`, keyed by vanity string.
///
/// Nothing is ever dropped. A stored fallback-only entry picks up the
/// category of the first incoming duplicate that has one. The result lists
/// category-attributed matches before fallback-only ones, each group sorted
/// by word length (stable).
pub fn merge_results(existing: &[VanityMatch], incoming: &[VanityMatch]) -> Vec<VanityMatch> {
    let mut merged: Vec<VanityMatch> = Vec::with_capacity(existing.len() + incoming.len());
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in existing.iter().chain(incoming.iter()) {
        match index.get(&entry.vanity) {
            Some(&slot) => {
                let stored = &mut merged[slot];
                if stored.from_category.is_none() && entry.from_category.is_some() {
                    stored.from_category = entry.from_category.clone();
                }
            }
            None => {
                index.insert(entry.vanity.clone(), merged.len());
                merged.push(entry.clone());
            }
        }
    }

    let (mut attributed, mut fallback): (Vec<_>, Vec<_>) =
        merged.into_iter().partition(VanityMatch::has_category);
    sort_by_length(&mut attributed);
    sort_by_length(&mut fallback);
    attributed.extend(fallback);
    attributed
}
