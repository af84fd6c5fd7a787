// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - theme: Color palette consumed by every widget
// - layout: Calculates screen layout (title, form, results, legend)
// - render: Main orchestration function that coordinates all rendering
// - form: Renders the query field, count field and search button
// - results: Renders spinner, error banner, hints or listing cards
// - legend: Renders hotkey legend
// - toast: Renders toast notifications (brief pop-up messages)

pub mod form;
pub mod layout;
pub mod legend;
pub mod render;
pub mod results;
pub mod theme;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
