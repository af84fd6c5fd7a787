//! UI state transition logic
//!
//! Pure functions for focus cycling, toast timing and spinner frames.

use crate::model::Focus;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAME_MS: u128 = 80;

/// Check whether a toast shown `elapsed_ms` ago should be dismissed
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Cycle focus forward: Query → Count → Results → Query
///
/// Results is skipped when there is nothing to select.
///
/// # Examples
/// ```
/// use mapscout::model::Focus;
/// use mapscout::logic::ui::next_focus;
///
/// assert_eq!(next_focus(Focus::Query, true), Focus::Count);
/// assert_eq!(next_focus(Focus::Count, true), Focus::Results);
/// assert_eq!(next_focus(Focus::Count, false), Focus::Query);
/// ```
pub fn next_focus(current: Focus, has_results: bool) -> Focus {
    match current {
        Focus::Query => Focus::Count,
        Focus::Count if has_results => Focus::Results,
        Focus::Count | Focus::Results => Focus::Query,
    }
}

/// Cycle focus backward: Query → Results → Count → Query
pub fn prev_focus(current: Focus, has_results: bool) -> Focus {
    match current {
        Focus::Query if has_results => Focus::Results,
        Focus::Query => Focus::Count,
        Focus::Results => Focus::Count,
        Focus::Count => Focus::Query,
    }
}

/// Spinner glyph for the given animation time
pub fn spinner_frame(elapsed_ms: u128) -> &'static str {
    let idx = (elapsed_ms / SPINNER_FRAME_MS) as usize % SPINNER_FRAMES.len();
    SPINNER_FRAMES[idx]
}
