//! UI Model
//!
//! State owned by the terminal front end only: which form element has
//! focus, the raw text of the count field, card selection, and toasts.
//! Nothing here feeds back into the search lifecycle.

use std::time::Instant;

/// Focusable element of the screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Query,
    Count,
    Results,
}

/// UI-only state
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Element currently receiving keystrokes
    pub focus: Focus,

    /// Count field exactly as typed (may be empty or non-numeric)
    pub count_input: String,

    /// Selected result card
    pub selected_result: Option<usize>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Drives the spinner animation
    pub started_at: Instant,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(result_count: u32) -> Self {
        Self {
            focus: Focus::Query,
            count_input: result_count.to_string(),
            selected_result: None,
            toast_message: None,
            started_at: Instant::now(),
            should_quit: false,
        }
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }

    /// Reset card selection after the result list was replaced
    pub fn reset_selection(&mut self, result_len: usize) {
        self.selected_result = if result_len == 0 { None } else { Some(0) };
        if result_len == 0 && self.focus == Focus::Results {
            self.focus = Focus::Query;
        }
    }
}
