//! Search Controller
//!
//! Owns the one `SearchState` and is the only code that mutates it. Drives
//! at most one request at a time through `Idle/Success/Failure → Loading →
//! Success | Failure`.
//!
//! Submission and settlement are split (`submit_search` / `settle`) so the
//! terminal UI can hand the request to a background worker and keep
//! drawing; `run_search` chains both for callers that simply await.

use anyhow::Result;

use crate::api::SearchBackend;
use crate::logic::errors::format_error_message;
use crate::logic::input::parse_result_count;
use crate::model::{Listing, Phase, SearchRequest, SearchState};
use crate::utils::log_debug;

/// A request that passed validation and is now in flight
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    /// Monotonic id, only used to correlate log lines
    pub id: u64,
    pub request: SearchRequest,
}

#[derive(Debug)]
pub struct SearchController {
    state: SearchState,
    next_request_id: u64,
    in_flight: Option<u64>,
}

impl SearchController {
    pub fn new(result_count: u32) -> Self {
        Self {
            state: SearchState::new(result_count),
            next_request_id: 1,
            in_flight: None,
        }
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Replace the query text; never validated and never changes the phase
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.state.query = text.into();
    }

    /// Store the parsed count, clamped to at least 1
    pub fn set_result_count(&mut self, raw: &str) {
        self.state.result_count = parse_result_count(raw);
    }

    /// Start a search
    ///
    /// Returns `None` (and changes nothing) when the query is blank or a
    /// request is already in flight. Otherwise clears the previous outcome,
    /// enters `Loading`, and returns the request frozen from the current
    /// fields.
    pub fn submit_search(&mut self) -> Option<Submission> {
        if !self.state.can_submit() {
            log_debug(&format!(
                "Search rejected (phase: {:?}, query: {:?})",
                self.state.phase, self.state.query
            ));
            return None;
        }

        let id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(id);

        self.state.error_message = None;
        self.state.results.clear();
        self.state.phase = Phase::Loading;

        let request = SearchRequest {
            query: self.state.query.clone(),
            result_count: self.state.result_count,
        };
        log_debug(&format!(
            "Search #{} submitted: {:?} ({} results)",
            id, request.query, request.result_count
        ));

        Some(Submission { id, request })
    }

    /// Apply the outcome of the in-flight request
    ///
    /// The outcome is applied even if the fields were edited meanwhile.
    /// Returns `false` when nothing was in flight.
    pub fn settle(&mut self, id: u64, outcome: Result<Vec<Listing>>) -> bool {
        let Some(expected) = self.in_flight.take() else {
            log_debug(&format!("Search #{} settled with nothing in flight, ignored", id));
            return false;
        };
        if expected != id {
            log_debug(&format!(
                "Search #{} settled while #{} was in flight, applying anyway",
                id, expected
            ));
        }

        match outcome {
            Ok(listings) => {
                log_debug(&format!("Search #{} succeeded with {} results", id, listings.len()));
                self.state.results = listings;
                self.state.error_message = None;
                self.state.phase = Phase::Success;
            }
            Err(e) => {
                let message = format_error_message(&e);
                log_debug(&format!("Search #{} failed: {:#}", id, e));
                self.state.results.clear();
                self.state.error_message = Some(message);
                self.state.phase = Phase::Failure;
            }
        }

        true
    }

    /// Submit, await the backend, and settle in one call
    ///
    /// Returns the settled state, or `None` if the submission was rejected.
    pub async fn run_search<B: SearchBackend>(&mut self, backend: &B) -> Option<&SearchState> {
        let submission = self.submit_search()?;
        let outcome = backend.scrape(&submission.request).await;
        self.settle(submission.id, outcome);
        Some(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_RESULT_COUNT;

    fn controller_with_query(query: &str) -> SearchController {
        let mut controller = SearchController::new(DEFAULT_RESULT_COUNT);
        controller.set_query(query);
        controller
    }

    #[test]
    fn test_set_query_keeps_phase() {
        let mut controller = SearchController::new(DEFAULT_RESULT_COUNT);
        controller.set_query("  ");
        assert_eq!(controller.state().phase(), Phase::Idle);
        assert_eq!(controller.state().query(), "  ");
    }

    #[test]
    fn test_set_result_count_clamps() {
        let mut controller = SearchController::new(DEFAULT_RESULT_COUNT);
        controller.set_result_count("0");
        assert_eq!(controller.state().result_count(), 1);
        controller.set_result_count("abc");
        assert_eq!(controller.state().result_count(), 1);
        controller.set_result_count("42");
        assert_eq!(controller.state().result_count(), 42);
    }

    #[test]
    fn test_blank_query_rejected() {
        let mut controller = controller_with_query("   ");
        assert!(controller.submit_search().is_none());
        assert_eq!(controller.state().phase(), Phase::Idle);
    }

    #[test]
    fn test_submit_enters_loading_with_frozen_request() {
        let mut controller = controller_with_query("coffee shop");
        controller.set_result_count("5");

        let submission = controller.submit_search().unwrap();
        assert_eq!(submission.request.query, "coffee shop");
        assert_eq!(submission.request.result_count, 5);
        assert_eq!(controller.state().phase(), Phase::Loading);

        // Later edits don't touch the in-flight request
        controller.set_query("tea");
        controller.set_result_count("9");
        assert_eq!(submission.request.query, "coffee shop");
        assert_eq!(submission.request.result_count, 5);
    }

    #[test]
    fn test_submit_while_loading_rejected() {
        let mut controller = controller_with_query("pizza");
        let first = controller.submit_search().unwrap();
        assert!(controller.submit_search().is_none());
        assert_eq!(controller.state().phase(), Phase::Loading);

        assert!(controller.settle(first.id, Ok(vec![])));
        assert!(controller.submit_search().is_some());
    }

    #[test]
    fn test_settle_success() {
        let mut controller = controller_with_query("pizza");
        let submission = controller.submit_search().unwrap();
        let listings = vec![Listing::default(), Listing::default()];

        assert!(controller.settle(submission.id, Ok(listings)));
        assert_eq!(controller.state().phase(), Phase::Success);
        assert_eq!(controller.state().results().len(), 2);
        assert!(controller.state().error_message().is_none());
        assert!(controller.state().is_consistent());
    }

    #[test]
    fn test_settle_failure() {
        let mut controller = controller_with_query("pizza");
        let submission = controller.submit_search().unwrap();

        controller.settle(submission.id, Err(anyhow::anyhow!("connection refused")));
        assert_eq!(controller.state().phase(), Phase::Failure);
        assert_eq!(controller.state().error_message(), Some("connection refused"));
        assert!(controller.state().results().is_empty());
        assert!(controller.state().is_consistent());
    }

    #[test]
    fn test_guard_released_once() {
        let mut controller = controller_with_query("pizza");
        let submission = controller.submit_search().unwrap();
        assert!(controller.settle(submission.id, Ok(vec![Listing::default()])));

        // A duplicate settlement must not clobber the settled state
        assert!(!controller.settle(submission.id, Err(anyhow::anyhow!("late"))));
        assert_eq!(controller.state().phase(), Phase::Success);
        assert_eq!(controller.state().results().len(), 1);
    }

    #[test]
    fn test_resubmit_clears_previous_outcome() {
        let mut controller = controller_with_query("pizza");
        let first = controller.submit_search().unwrap();
        controller.settle(first.id, Err(anyhow::anyhow!("boom")));
        assert!(controller.state().error_message().is_some());

        let second = controller.submit_search().unwrap();
        assert!(second.id > first.id);
        assert!(controller.state().error_message().is_none());
        assert!(controller.state().results().is_empty());
        assert!(controller.state().is_consistent());
    }

    #[test]
    fn test_stale_response_still_applied() {
        let mut controller = controller_with_query("pizza");
        let submission = controller.submit_search().unwrap();
        controller.set_query("sushi");

        let listing = Listing {
            name: Some("Pizza Place".to_string()),
            ..Default::default()
        };
        controller.settle(submission.id, Ok(vec![listing]));
        assert_eq!(controller.state().query(), "sushi");
        assert_eq!(
            controller.state().results()[0].name.as_deref(),
            Some("Pizza Place")
        );
    }
}
