//! Search Form UI
//!
//! Renders the query field, the result-count field and the search button.
//! Fields are dimmed and take no cursor while a request is in flight.

use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use mapscout::model::{Focus, SearchState};

use super::layout::calculate_form_layout;
use super::theme::Theme;

/// Render the form row
///
/// # Arguments
/// - `state`: Search snapshot (query text, loading flag, submit enablement)
/// - `count_input`: Count field text as typed
/// - `focus`: Element receiving keystrokes
/// - `spinner`: Current spinner glyph, shown on the button while loading
pub fn render_search_form(
    f: &mut Frame,
    area: Rect,
    state: &SearchState,
    count_input: &str,
    focus: Focus,
    spinner: &str,
    theme: &Theme,
) {
    let form = calculate_form_layout(area);
    let loading = state.is_loading();

    render_field(
        f,
        form.query_area,
        " What to search for? ",
        state.query(),
        focus == Focus::Query,
        loading,
        theme,
    );
    render_field(
        f,
        form.count_area,
        " How many results? ",
        count_input,
        focus == Focus::Count,
        loading,
        theme,
    );

    let (label, style) = if loading {
        (
            format!("{} Searching", spinner),
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )
    } else if state.can_submit() {
        (
            "Search".to_string(),
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )
    } else {
        ("Search".to_string(), Style::default().fg(theme.divider))
    };

    let button = Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style.remove_modifier(Modifier::BOLD)),
        );
    f.render_widget(button, form.button_area);
}

fn render_field(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    focused: bool,
    disabled: bool,
    theme: &Theme,
) {
    let border_color = if focused && !disabled {
        theme.primary
    } else {
        theme.divider
    };
    let text_color = if disabled {
        theme.text_secondary
    } else {
        theme.text
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title.to_string(), Style::default().fg(theme.text_secondary)))
        .border_style(Style::default().fg(border_color));

    // Keep the tail of long input visible
    let inner_width = area.width.saturating_sub(2) as usize;
    let visible = tail_fitting(value, inner_width.saturating_sub(1));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        visible.to_string(),
        Style::default().fg(text_color),
    )))
    .block(block);
    f.render_widget(paragraph, area);

    if focused && !disabled {
        let cursor_x = area.x + 1 + visible.width() as u16;
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

/// Longest suffix of `text` whose display width fits in `max_width`
fn tail_fitting(text: &str, max_width: usize) -> &str {
    if text.width() <= max_width {
        return text;
    }
    let mut width = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    &text[start..]
}
