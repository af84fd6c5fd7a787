//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Error message derivation for the error banner
//! - export: Writing results to disk
//! - input: Query and result-count field rules
//! - links: Website scheme qualification
//! - navigation: Result card selection
//! - normalize: Raw service records to Listings
//! - presenter: SearchState to results view
//! - ui: Focus cycling, toast timing, spinner frames

pub mod errors;
pub mod export;
pub mod input;
pub mod links;
pub mod navigation;
pub mod normalize;
pub mod presenter;
pub mod ui;
