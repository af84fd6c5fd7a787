//! Search Model
//!
//! The single search record shown by the UI: editable fields, lifecycle
//! phase, and the normalized listings of the last settled request.
//!
//! Mutation goes through `crate::controller::SearchController`; everything
//! outside the crate only ever sees `&SearchState`.

use serde::Serialize;

/// Result count used when nothing else is configured
pub const DEFAULT_RESULT_COUNT: u32 = 10;

/// Lifecycle stage of the search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Failure,
}

/// One normalized business record
///
/// Serialized with the scraping service's field names so exports look like
/// the service output.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Listing {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    /// Raw value from the service, not scheme-qualified
    pub website: Option<String>,
    pub reviews_average: Option<f64>,
    /// Zero when the service did not report a count
    pub reviews_count: u64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Frozen copy of the fields sent with one outbound request
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    #[serde(rename = "search_query")]
    pub query: String,
    #[serde(rename = "total_results")]
    pub result_count: u32,
}

/// Search lifecycle state
#[derive(Clone, Debug, PartialEq)]
pub struct SearchState {
    pub(crate) phase: Phase,
    pub(crate) query: String,
    pub(crate) result_count: u32,
    pub(crate) results: Vec<Listing>,
    pub(crate) error_message: Option<String>,
}

impl SearchState {
    pub(crate) fn new(result_count: u32) -> Self {
        Self {
            phase: Phase::Idle,
            query: String::new(),
            result_count: result_count.max(1),
            results: Vec::new(),
            error_message: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn result_count(&self) -> u32 {
        self.result_count
    }

    pub fn results(&self) -> &[Listing] {
        &self.results
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && crate::logic::input::is_submittable_query(&self.query)
    }

    /// Check the results/error exclusivity rules
    ///
    /// Non-empty results only in Success, an error message only in Failure,
    /// never both at once.
    pub fn is_consistent(&self) -> bool {
        let results_ok = self.results.is_empty() || self.phase == Phase::Success;
        let error_ok = self.error_message.is_none() || self.phase == Phase::Failure;
        let exclusive = self.results.is_empty() || self.error_message.is_none();
        results_ok && error_ok && exclusive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_empty() {
        let state = SearchState::new(DEFAULT_RESULT_COUNT);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.query(), "");
        assert_eq!(state.result_count(), 10);
        assert!(state.results().is_empty());
        assert!(state.error_message().is_none());
        assert!(state.is_consistent());
    }

    #[test]
    fn test_new_state_clamps_zero_count() {
        let state = SearchState::new(0);
        assert_eq!(state.result_count(), 1);
    }

    #[test]
    fn test_cannot_submit_blank_query() {
        let mut state = SearchState::new(DEFAULT_RESULT_COUNT);
        state.query = "   ".to_string();
        assert!(!state.can_submit());

        state.query = "pizza".to_string();
        assert!(state.can_submit());

        state.phase = Phase::Loading;
        assert!(!state.can_submit());
    }

    #[test]
    fn test_inconsistent_error_with_results() {
        let mut state = SearchState::new(DEFAULT_RESULT_COUNT);
        state.phase = Phase::Success;
        state.results = vec![Listing::default()];
        assert!(state.is_consistent());

        state.error_message = Some("boom".to_string());
        assert!(!state.is_consistent());
    }

    #[test]
    fn test_request_serializes_with_wire_names() {
        let request = SearchRequest {
            query: "coffee shop".to_string(),
            result_count: 5,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["search_query"], "coffee shop");
        assert_eq!(json["total_results"], 5);
    }
}
