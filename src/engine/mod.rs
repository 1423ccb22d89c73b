//! Matching, ranking and merge engine
//!
//! Pure functions over word lists and stored results; no I/O happens here.

mod filter;
mod matcher;
mod merge;
mod planner;
mod query_log;
mod validation;

pub use filter::WordFilter;
pub use matcher::{layout, sort_by_length, VanityMatcher};
pub use merge::merge_results;
pub use planner::{MatchPlan, MatchPlanner};
pub use query_log::{record_query, record_query_at};
pub use validation::{resolve_best, NO_RESULT};
