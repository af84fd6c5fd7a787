//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - The search controller (in the library)
//! - The scrape worker (in src/services/)
//! - UI-only state (focus, count field text, selection, toasts)
//!
//! Methods are kept as `impl App` but organized by functional domain.

pub(crate) mod actions;
pub(crate) mod form;
