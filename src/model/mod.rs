//! Application Model
//!
//! - **search**: the search lifecycle record and its value types
//! - **ui**: terminal-only state (focus, selection, toasts)

pub mod search;
pub mod ui;

pub use search::{Listing, Phase, SearchRequest, SearchState, DEFAULT_RESULT_COUNT};
pub use ui::{Focus, UiModel};
