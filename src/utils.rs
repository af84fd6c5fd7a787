//! Utility functions used throughout the application

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

// Global flag for debug mode
pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("mapscout-debug.log");
    path
}

/// Append a timestamped line to the debug log
///
/// No-op unless debug mode is enabled. Never writes to the terminal, which
/// is in raw mode while the UI runs.
pub fn log_debug(msg: &str) {
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(get_debug_log_path())
    {
        let _ = writeln!(
            file,
            "[{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            msg
        );
    }
}
