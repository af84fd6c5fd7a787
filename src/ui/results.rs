//! Results Area UI
//!
//! Draws whatever the presenter decided: a spinner, an error banner, a hint,
//! or a scrolling stack of listing cards.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use mapscout::logic::presenter::{ListingCard, ResultsView};

use super::layout::{first_visible_card, visible_card_count, CARD_HEIGHT};
use super::theme::Theme;

pub fn render_results(
    f: &mut Frame,
    area: Rect,
    view: &ResultsView,
    selected: Option<usize>,
    focused: bool,
    spinner: &str,
    theme: &Theme,
) {
    match view {
        ResultsView::Loading => {
            let line = Line::from(vec![
                Span::styled(spinner.to_string(), Style::default().fg(theme.primary)),
                Span::styled(" Scraping...", Style::default().fg(theme.text_secondary)),
            ]);
            render_centered(f, area, line);
        }
        ResultsView::Error(message) => render_error_banner(f, area, message, theme),
        ResultsView::Onboarding(hint) | ResultsView::NoResults(hint) => {
            let line = Line::from(Span::styled(
                hint.to_string(),
                Style::default().fg(theme.text_secondary),
            ));
            render_centered(f, area, line);
        }
        ResultsView::Cards(cards) => render_cards(f, area, cards, selected, focused, theme),
    }
}

fn render_centered(f: &mut Frame, area: Rect, line: Line) {
    let y_offset = 1.min(area.height.saturating_sub(1));
    let row = Rect {
        x: area.x,
        y: area.y + y_offset,
        width: area.width,
        height: area.height.saturating_sub(y_offset),
    };
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, row);
}

fn render_error_banner(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let height = 3.min(area.height);
    let banner_area = Rect {
        x: area.x,
        y: area.y + 1.min(area.height.saturating_sub(height)),
        width: area.width,
        height,
    };

    let line = Line::from(vec![
        Span::styled("✗ ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::styled(message.to_string(), Style::default().fg(Color::Black)),
    ]);

    let banner = Paragraph::new(line)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(theme.error))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Error ")
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(banner, banner_area);
}

fn render_cards(
    f: &mut Frame,
    area: Rect,
    cards: &[ListingCard],
    selected: Option<usize>,
    focused: bool,
    theme: &Theme,
) {
    let visible = visible_card_count(area.height);
    let first = first_visible_card(selected, cards.len(), visible);

    for (row, (idx, card)) in cards.iter().enumerate().skip(first).take(visible).enumerate() {
        let y = area.y + row as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let card_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        let is_selected = focused && selected == Some(idx);
        render_card(f, card_area, card, idx, cards.len(), is_selected, theme);
    }
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    card: &ListingCard,
    idx: usize,
    total: usize,
    is_selected: bool,
    theme: &Theme,
) {
    let border_color = if is_selected { theme.secondary } else { theme.divider };
    let label_style = Style::default().fg(theme.text_secondary);

    let mut lines = vec![Line::from(Span::styled(
        card.title.clone(),
        Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
    ))];

    for (label, value) in card.detail_rows() {
        let value_span = if label == "Website" && card.website.is_some() {
            Span::styled(
                value.to_string(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::UNDERLINED),
            )
        } else {
            Span::styled(value.to_string(), Style::default().fg(theme.text))
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", label), label_style),
            value_span,
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {}/{} ", idx + 1, total), label_style))
        .border_style(Style::default().fg(border_color));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
