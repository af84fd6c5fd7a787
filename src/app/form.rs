//! Search form methods
//!
//! Field edits and submission. Every edit is forwarded to the controller
//! right away; submission hands the frozen request to the scrape worker.

use mapscout::logic::input::is_count_char;

use crate::services::ScrapeJob;
use crate::{log_debug, App};

impl App {
    pub(crate) fn push_query_char(&mut self, c: char) {
        let mut query = self.controller.state().query().to_string();
        query.push(c);
        self.controller.set_query(query);
    }

    pub(crate) fn pop_query_char(&mut self) {
        let mut query = self.controller.state().query().to_string();
        query.pop();
        self.controller.set_query(query);
    }

    pub(crate) fn clear_query(&mut self) {
        self.controller.set_query(String::new());
    }

    pub(crate) fn push_count_char(&mut self, c: char) {
        if !is_count_char(c) {
            return;
        }
        self.ui.count_input.push(c);
        self.controller.set_result_count(&self.ui.count_input);
    }

    pub(crate) fn pop_count_char(&mut self) {
        self.ui.count_input.pop();
        self.controller.set_result_count(&self.ui.count_input);
    }

    /// Increment or decrement the stored count (never below 1)
    pub(crate) fn step_count(&mut self, delta: i64) {
        let current = i64::from(self.controller.state().result_count());
        let next = current.saturating_add(delta).max(1);
        self.ui.count_input = next.to_string();
        self.controller.set_result_count(&self.ui.count_input);
    }

    /// Submit the current form
    ///
    /// Rejected submissions (blank query, request in flight) do nothing.
    pub(crate) fn submit_search(&mut self) {
        let Some(submission) = self.controller.submit_search() else {
            return;
        };

        // Show the clamped value the request actually carries
        self.ui.count_input = submission.request.result_count.to_string();
        self.ui.selected_result = None;

        let id = submission.id;
        let job = ScrapeJob {
            id,
            request: submission.request,
        };
        if self.scrape_tx.send(job).is_err() {
            log_debug(&format!("Scrape worker gone, failing search #{}", id));
            self.controller
                .settle(id, Err(anyhow::anyhow!("Scrape worker is not running")));
        }
    }
}
