//! Per-invocation orchestration
//!
//! Two terminal paths: validating callers get their best stored result back;
//! everyone else gets a fresh search merged into their stored record.

use std::sync::Arc;
use std::time::Instant;

use futures::future::join;
use serde_json::Value;

use crate::engine::{
    merge_results, record_query, resolve_best, MatchPlanner, VanityMatcher, WordFilter,
};
use crate::error::Result;
use crate::event::VanityRequest;
use crate::store::CallerStore;
use crate::types::{CallerRecord, InvocationOutput, MatchConfig, SearchOutput, ValidationOutput};
use crate::words::{category_candidates, CategoryResolver, Dictionary};

/// Vanity number service with injected collaborators
#[derive(Clone)]
pub struct VanityService {
    filter: WordFilter,
    planner: MatchPlanner,
    dictionary: Arc<Dictionary>,
    resolver: Arc<dyn CategoryResolver>,
    store: Arc<dyn CallerStore>,
}

impl VanityService {
    pub fn new(
        config: &MatchConfig,
        dictionary: Arc<Dictionary>,
        resolver: Arc<dyn CategoryResolver>,
        store: Arc<dyn CallerStore>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            filter: WordFilter::new(config)?,
            planner: MatchPlanner::new(VanityMatcher::new(config)),
            dictionary,
            resolver,
            store,
        })
    }

    /// Handle a raw invocation event. Never fails; see [`Self::handle_request`].
    pub async fn handle(&self, event: &Value) -> InvocationOutput {
        self.handle_request(VanityRequest::from_event(event)).await
    }

    /// Handle a decoded invocation.
    ///
    /// Collaborator failures are logged and absorbed, so some result is
    /// always returned.
    pub async fn handle_request(&self, request: VanityRequest) -> InvocationOutput {
        if request.validating {
            InvocationOutput::Validation(self.validate(&request).await)
        } else {
            InvocationOutput::Search(self.search(&request).await)
        }
    }

    /// Best previously stored result, without searching
    pub async fn validate(&self, request: &VanityRequest) -> ValidationOutput {
        let record = self.load_record(&request.phone_number).await;
        let stored = record.map(|r| r.top_results).unwrap_or_default();
        let previous_top_result = resolve_best(&stored);

        tracing::info!(
            caller = %request.phone_number,
            stored = stored.len(),
            result = %previous_top_result,
            "Validating caller resolved"
        );
        ValidationOutput { previous_top_result }
    }

    /// Search, merge into the caller's record, persist, and report
    pub async fn search(&self, request: &VanityRequest) -> SearchOutput {
        let start = Instant::now();
        let digits = request.digits();

        let (category_words, prior) = join(
            category_candidates(self.resolver.as_ref(), &request.category, &self.filter),
            self.load_record(&request.phone_number),
        )
        .await;

        let plan = self.planner.plan(
            &digits,
            &request.category,
            &category_words,
            self.dictionary.words(),
        );

        let mut record = prior.unwrap_or_else(|| CallerRecord::new(&request.phone_number));
        record.caller_number = request.phone_number.clone();
        record.top_results = merge_results(&record.top_results, &plan.candidates());
        record.previous_queries = record_query(&record.previous_queries, &request.category);

        if let Err(e) = self.store.save(&record).await {
            tracing::error!(
                store = self.store.name(),
                caller = %request.phone_number,
                error = %e,
                "Failed to persist caller record"
            );
        }

        let output = SearchOutput::from_ranked(&record.top_results, plan.used_fallback);
        tracing::info!(
            caller = %request.phone_number,
            category = %request.category,
            new_matches = plan.total(),
            stored = record.top_results.len(),
            used_fallback = plan.used_fallback,
            duration_ms = %start.elapsed().as_millis(),
            "Vanity search completed"
        );
        output
    }

    /// Prior record, treating read failures as "no record"
    async fn load_record(&self, caller_number: &str) -> Option<CallerRecord> {
        match self.store.load(caller_number).await {
            Ok(record) => record,
            Err(e) if e.is_collaborator_failure() => {
                tracing::warn!(
                    store = self.store.name(),
                    caller = %caller_number,
                    error = %e,
                    "Failed to read caller record, starting empty"
                );
                None
            }
            Err(e) => {
                tracing::error!(
                    store = self.store.name(),
                    caller = %caller_number,
                    error = %e,
                    "Stored caller record is unreadable, treating it as absent"
                );
                None
            }
        }
    }
}
