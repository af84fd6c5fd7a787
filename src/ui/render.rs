use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use mapscout::logic::presenter::present;
use mapscout::logic::ui::spinner_frame;
use mapscout::model::Focus;

use super::{form, layout, legend, results, toast};
use crate::App;

/// Main render function - orchestrates all UI rendering
///
/// Everything is re-derived from the controller snapshot and the UI model
/// on every frame.
pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let state = app.controller.state();
    let has_results = !state.results().is_empty();
    let spinner = spinner_frame(app.ui.started_at.elapsed().as_millis());

    let legend_height = legend::calculate_legend_height(
        size.width,
        app.ui.focus,
        state.is_loading(),
        has_results,
        app.open_command.is_some(),
    );
    let layout_info = layout::calculate_layout(size, legend_height);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " Google Maps Scraper",
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", app.endpoint),
            Style::default().fg(app.theme.text_secondary),
        ),
    ]))
    .style(Style::default().bg(app.theme.primary));
    f.render_widget(title, layout_info.title_area);

    form::render_search_form(
        f,
        layout_info.form_area,
        state,
        &app.ui.count_input,
        app.ui.focus,
        spinner,
        &app.theme,
    );

    let view = present(state);
    results::render_results(
        f,
        layout_info.results_area,
        &view,
        app.ui.selected_result,
        app.ui.focus == Focus::Results,
        spinner,
        &app.theme,
    );

    legend::render_legend(
        f,
        layout_info.legend_area,
        app.ui.focus,
        state.is_loading(),
        has_results,
        app.open_command.is_some(),
        &app.theme,
    );

    if let Some((message, _)) = &app.ui.toast_message {
        toast::render_toast(f, size, message, &app.theme);
    }
}
