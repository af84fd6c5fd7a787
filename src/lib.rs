//! Map Scout Library
//!
//! Exposes the search lifecycle, the scraping-service client and the pure
//! presentation logic for the binary and for testing.

pub mod api;
pub mod controller;
pub mod logic;
pub mod model;
pub mod utils;
