//! Keyboard Input Handler
//!
//! Maps key presses to form edits, submission, focus changes and result
//! actions. Form fields ignore edits while a search is in flight.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use mapscout::logic::{navigation, ui::next_focus, ui::prev_focus};
use mapscout::model::Focus;

use crate::App;

/// Cards skipped by PgUp/PgDn
const PAGE_CARDS: usize = 5;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let has_results = !app.controller.state().results().is_empty();

    // Global keys first
    match key.code {
        KeyCode::Char('c') if ctrl => {
            app.ui.should_quit = true;
            return Ok(());
        }
        KeyCode::Char('s') if ctrl => {
            app.export_results();
            return Ok(());
        }
        KeyCode::Esc => {
            if app.ui.focus == Focus::Results {
                app.ui.focus = Focus::Query;
            } else {
                app.ui.should_quit = true;
            }
            return Ok(());
        }
        KeyCode::Tab => {
            app.ui.focus = next_focus(app.ui.focus, has_results);
            return Ok(());
        }
        KeyCode::BackTab => {
            app.ui.focus = prev_focus(app.ui.focus, has_results);
            return Ok(());
        }
        _ => {}
    }

    match app.ui.focus {
        Focus::Query => handle_query_key(app, key, ctrl),
        Focus::Count => handle_count_key(app, key),
        Focus::Results => handle_results_key(app, key),
    }

    Ok(())
}

fn handle_query_key(app: &mut App, key: KeyEvent, ctrl: bool) {
    if app.controller.state().is_loading() {
        return;
    }

    match key.code {
        KeyCode::Enter => app.submit_search(),
        KeyCode::Backspace => app.pop_query_char(),
        KeyCode::Char('u') if ctrl => app.clear_query(),
        KeyCode::Char(c) if !ctrl => app.push_query_char(c),
        KeyCode::Down => app.ui.focus = Focus::Count,
        _ => {}
    }
}

fn handle_count_key(app: &mut App, key: KeyEvent) {
    if app.controller.state().is_loading() {
        return;
    }

    match key.code {
        KeyCode::Enter => app.submit_search(),
        KeyCode::Backspace => app.pop_count_char(),
        KeyCode::Char(c) => app.push_count_char(c),
        KeyCode::Up => app.step_count(1),
        KeyCode::Down => app.step_count(-1),
        _ => {}
    }
}

fn handle_results_key(app: &mut App, key: KeyEvent) {
    let len = app.controller.state().results().len();
    let current = app.ui.selected_result;

    app.ui.selected_result = match key.code {
        KeyCode::Down | KeyCode::Char('j') => navigation::next_selection(current, len),
        KeyCode::Up | KeyCode::Char('k') => navigation::prev_selection(current, len),
        KeyCode::PageDown => navigation::page_down(current, len, PAGE_CARDS),
        KeyCode::PageUp => navigation::page_up(current, len, PAGE_CARDS),
        KeyCode::Home | KeyCode::Char('g') => navigation::page_up(current, len, len),
        KeyCode::End | KeyCode::Char('G') => navigation::page_down(current, len, len),
        KeyCode::Char('o') | KeyCode::Enter => {
            app.open_selected_website();
            current
        }
        _ => current,
    };
}
