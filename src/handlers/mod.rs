//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - keyboard: User keyboard input
//! - scrape: Settled searches from the background worker

pub mod keyboard;
pub mod scrape;

// Re-export for convenience
pub use keyboard::handle_key;
pub use scrape::handle_scrape_outcome;
