//! External Services
//!
//! This module contains services that interact with external systems:
//! - scrape: background worker running searches against the scraping service

pub mod scrape;

pub use scrape::{spawn_scrape_service, ScrapeJob, ScrapeOutcome};
