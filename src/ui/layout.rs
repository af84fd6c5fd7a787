use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of one result card (borders + title + five detail rows)
pub const CARD_HEIGHT: u16 = 8;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top title bar area
    pub title_area: Rect,
    /// Search form row (query, count, button)
    pub form_area: Rect,
    /// Results area (spinner, banner, hint or cards)
    pub results_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
}

/// Form row split into its three controls
pub struct FormLayout {
    pub query_area: Rect,
    pub count_area: Rect,
    pub button_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, legend_height: u16) -> LayoutInfo {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Title bar
            Constraint::Length(3),             // Form controls (bordered, one line of text)
            Constraint::Min(3),                // Results
            Constraint::Length(legend_height), // Legend
        ])
        .split(terminal_size);

    LayoutInfo {
        title_area: chunks[0],
        form_area: chunks[1],
        results_area: chunks[2],
        legend_area: chunks[3],
    }
}

/// Split the form row: query takes the remaining width
pub fn calculate_form_layout(form_area: Rect) -> FormLayout {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(22),
            Constraint::Length(16),
        ])
        .split(form_area);

    FormLayout {
        query_area: chunks[0],
        count_area: chunks[1],
        button_area: chunks[2],
    }
}

/// How many whole cards fit in `height` rows (at least one)
pub fn visible_card_count(height: u16) -> usize {
    ((height / CARD_HEIGHT) as usize).max(1)
}

/// First card index to draw so that `selected` stays on screen
pub fn first_visible_card(selected: Option<usize>, total: usize, visible: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };
    if total <= visible {
        return 0;
    }
    let selected = selected.min(total - 1);
    // Keep the selection on the last visible row once it scrolls past the window
    selected.saturating_sub(visible - 1).min(total - visible)
}
