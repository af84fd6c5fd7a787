//! Scrape Outcome Handler
//!
//! Applies settled searches from the background worker to the controller.

use crate::services::ScrapeOutcome;
use crate::App;

/// Handle a settled search
///
/// The controller applies the outcome even if the form was edited while the
/// request ran; the card selection is reset for the new result list.
pub fn handle_scrape_outcome(app: &mut App, outcome: ScrapeOutcome) {
    if app.controller.settle(outcome.id, outcome.result) {
        let result_len = app.controller.state().results().len();
        app.ui.reset_selection(result_len);
    }
}
