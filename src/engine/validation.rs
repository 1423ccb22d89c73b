//! Best-known result lookup for validating callers

use crate::engine::matcher::sort_by_length;
use crate::types::VanityMatch;

/// Returned when a caller has no stored results
pub const NO_RESULT: &str = "N/A";

/// Longest stored vanity string (first stored wins a tie), or [`NO_RESULT`].
pub fn resolve_best(stored: &[VanityMatch]) -> String {
    let mut ranked = stored.to_vec();
    sort_by_length(&mut ranked);
    ranked
        .into_iter()
        .next()
        .map(|m| m.vanity)
        .unwrap_or_else(|| NO_RESULT.to_string())
}
