use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use mapscout::model::Focus;

use super::theme::Theme;

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(
    focus: Focus,
    loading: bool,
    has_results: bool,
    has_open_command: bool,
    key_style: Style,
) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    match focus {
        Focus::Query | Focus::Count if !loading => {
            hotkey_spans.extend(vec![
                Span::styled("Enter", key_style),
                Span::raw(":Search  "),
            ]);
            if focus == Focus::Count {
                hotkey_spans.extend(vec![
                    Span::styled("↑/↓", key_style),
                    Span::raw(":±1  "),
                ]);
            } else {
                hotkey_spans.extend(vec![
                    Span::styled("^U", key_style),
                    Span::raw(":Clear  "),
                ]);
            }
        }
        Focus::Results => {
            hotkey_spans.extend(vec![
                Span::styled("↑/↓", key_style),
                Span::raw(":Select  "),
                Span::styled("PgUp/PgDn", key_style),
                Span::raw(":Page  "),
            ]);
            if has_open_command {
                hotkey_spans.extend(vec![
                    Span::styled("o", key_style),
                    Span::raw(":Open website  "),
                ]);
            }
        }
        _ => {}
    }

    hotkey_spans.extend(vec![
        Span::styled("Tab", key_style),
        Span::raw(":Next field  "),
    ]);

    if has_results {
        hotkey_spans.extend(vec![
            Span::styled("^S", key_style),
            Span::raw(":Save JSON  "),
        ]);
    }

    // Quit - always available
    hotkey_spans.extend(vec![
        Span::styled("Esc", key_style),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
fn build_legend_paragraph(
    focus: Focus,
    loading: bool,
    has_results: bool,
    has_open_command: bool,
    theme: &Theme,
) -> Paragraph<'static> {
    let hotkey_spans = build_hotkey_spans(
        focus,
        loading,
        has_results,
        has_open_command,
        Style::default().fg(theme.primary),
    );

    Paragraph::new(vec![Line::from(hotkey_spans)])
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.divider)),
        )
        .style(Style::default().fg(theme.text_secondary))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend (changes with focus and loading state)
pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    focus: Focus,
    loading: bool,
    has_results: bool,
    has_open_command: bool,
    theme: &Theme,
) {
    let legend = build_legend_paragraph(focus, loading, has_results, has_open_command, theme);
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    focus: Focus,
    loading: bool,
    has_results: bool,
    has_open_command: bool,
) -> u16 {
    // Count wrapped lines without the block, then add the top border
    let hotkey_spans =
        build_hotkey_spans(focus, loading, has_results, has_open_command, Style::default());
    let paragraph_for_counting = Paragraph::new(vec![Line::from(hotkey_spans)])
        .wrap(ratatui::widgets::Wrap { trim: false });

    let line_count = paragraph_for_counting.line_count(terminal_width);

    (line_count as u16).saturating_add(1).max(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn test_form_focus_offers_search() {
        let spans = build_hotkey_spans(Focus::Query, false, false, false, Style::default());
        let text = spans_to_text(&spans);
        assert!(text.contains("Enter:Search"), "got: {}", text);
        assert!(!text.contains("Save JSON"), "got: {}", text);
    }

    #[test]
    fn test_loading_hides_search() {
        let spans = build_hotkey_spans(Focus::Query, true, false, false, Style::default());
        let text = spans_to_text(&spans);
        assert!(!text.contains("Enter:Search"), "got: {}", text);
        assert!(text.ends_with("Esc:Quit"), "got: {}", text);
    }

    #[test]
    fn test_results_focus_with_open_command() {
        let spans = build_hotkey_spans(Focus::Results, false, true, true, Style::default());
        let text = spans_to_text(&spans);
        assert!(text.contains("o:Open website"), "got: {}", text);
        assert!(text.contains("^S:Save JSON"), "got: {}", text);
    }

    #[test]
    fn test_results_focus_without_open_command() {
        let spans = build_hotkey_spans(Focus::Results, false, true, false, Style::default());
        let text = spans_to_text(&spans);
        assert!(!text.contains("Open website"), "got: {}", text);
    }

    #[test]
    fn test_legend_height_grows_when_narrow() {
        let wide = calculate_legend_height(200, Focus::Results, false, true, true);
        let narrow = calculate_legend_height(30, Focus::Results, false, true, true);
        assert_eq!(wide, 2);
        assert!(narrow > wide);
    }
}
