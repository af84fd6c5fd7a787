//! Result actions
//!
//! User actions on the settled result list that reach outside the app:
//! - Open the selected listing's website with the configured command
//! - Export the results to a JSON file

use mapscout::logic::export;
use mapscout::logic::presenter::ListingCard;

use crate::{log_debug, App};

impl App {
    pub(crate) fn open_selected_website(&mut self) {
        let Some(ref open_cmd) = self.open_command else {
            self.ui.show_toast("Error: open_command not configured".to_string());
            return;
        };

        let listing = self
            .ui
            .selected_result
            .and_then(|idx| self.controller.state().results().get(idx));
        let Some(listing) = listing else {
            return;
        };

        let Some(link) = ListingCard::from_listing(listing).website else {
            self.ui.show_toast("Error: No website for this listing".to_string());
            return;
        };

        let result = std::process::Command::new(open_cmd)
            .arg(&link.href)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn();

        match result {
            Ok(_child) => {
                log_debug(&format!("open_command: spawned {} {}", open_cmd, link.href));
                self.ui.show_toast(format!("Opened: {}", link.href));
            }
            Err(e) => {
                log_debug(&format!("Failed to execute open_command '{}': {}", open_cmd, e));
                self.ui
                    .show_toast(format!("Error: Failed to open with '{}'", open_cmd));
            }
        }
    }

    pub(crate) fn export_results(&mut self) {
        let state = self.controller.state();
        if state.results().is_empty() {
            self.ui.show_toast("Error: No results to save".to_string());
            return;
        }

        match export::write_results(&self.export_dir, state.query(), state.results()) {
            Ok(path) => {
                log_debug(&format!(
                    "Exported {} results to {}",
                    state.results().len(),
                    path.display()
                ));
                self.ui.show_toast(format!("Saved: {}", path.display()));
            }
            Err(e) => {
                log_debug(&format!("Export failed: {:#}", e));
                self.ui.show_toast(format!("Error: {}", e));
            }
        }
    }
}
