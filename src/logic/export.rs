//! Saving results to disk
//!
//! Writes the current listings as pretty JSON, one file per query.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Listing;

/// File name used for a query's export
///
/// # Examples
/// ```
/// use mapscout::logic::export::export_filename;
///
/// assert_eq!(export_filename("coffee shop"), "google_maps_data_coffee_shop.json");
/// ```
pub fn export_filename(query: &str) -> String {
    let stem: String = query
        .trim()
        .chars()
        .map(|c| match c {
            ' ' => '_',
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    format!("google_maps_data_{}.json", stem)
}

/// Write `listings` under `dir`, creating the directory when missing
pub fn write_results(dir: &Path, query: &str, listings: &[Listing]) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let path = dir.join(export_filename(query));
    let json = serde_json::to_string_pretty(listings).context("Failed to serialize results")?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
