//! Input handling for the TUI.
//!
//! Processes keyboard input and dispatches to the appropriate handler
//! based on the current view and mode. Column sort toggles replace the
//! original's header clicks; paging and page-size intents map to single
//! keys.

use crate::app::{App, AppEvent, View};
use crate::util::MAX_SEARCH_LENGTH;
use crate::view::SortKey;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use super::Action;

/// Main input dispatch function.
pub(super) fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    // Search editing captures printable keys first
    if app.search_mode {
        return Ok(handle_search_input(app, code));
    }

    match app.view {
        View::Dashboard => handle_dashboard_input(app, code, modifiers, event_tx),
        View::Profile => handle_profile_input(app, code, event_tx),
    }
}

/// Handle input in the dashboard (records table) view.
fn handle_dashboard_input(
    app: &mut App,
    code: KeyCode,
    _modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    match code {
        KeyCode::Char('q') => return Ok(Action::Quit),

        KeyCode::Char('/') => {
            app.search_mode = true;
        }
        KeyCode::Esc => {
            // Clear an applied filter
            if !app.view_state.search.is_empty() {
                app.view_state.set_search("");
                app.clamp_selection();
            }
        }

        // Column sort toggles (1/2/3 ↔ the three sortable headers)
        KeyCode::Char('1') => toggle_sort(app, SortKey::PostId),
        KeyCode::Char('2') => toggle_sort(app, SortKey::Name),
        KeyCode::Char('3') => toggle_sort(app, SortKey::Email),

        // Paging: Previous is a no-op on page 1, Next on the last page
        KeyCode::Left | KeyCode::Char('h') => {
            app.view_state.prev_page();
            app.selected_row = 0;
        }
        KeyCode::Right | KeyCode::Char('l') => {
            let total = app.total_pages();
            app.view_state.next_page(total);
            app.selected_row = 0;
        }

        // Row selection within the visible page
        KeyCode::Down | KeyCode::Char('j') => {
            let rows = app.page_view().map(|v| v.rows.len()).unwrap_or(0);
            if rows > 0 {
                app.selected_row = app.selected_row.saturating_add(1).min(rows - 1);
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.selected_row = app.selected_row.saturating_sub(1);
        }

        KeyCode::Char('z') => {
            app.view_state.cycle_page_size();
            app.clamp_selection();
            app.set_status(format!(
                "Page size: {}",
                app.view_state.page_size.count()
            ));
        }

        KeyCode::Char('p') => {
            app.enter_profile(event_tx);
        }

        KeyCode::Char('r') => {
            app.reload_comments(event_tx);
            app.set_status("Reloading records...");
        }

        KeyCode::Char('t') => {
            let name = app.cycle_theme();
            app.set_status(format!("Theme: {}", name));
        }

        _ => {}
    }
    Ok(Action::Continue)
}

fn toggle_sort(app: &mut App, key: SortKey) {
    app.view_state.toggle_sort(key);
    // Sorting reorders the same result set; only the row highlight resets
    app.selected_row = 0;
}

/// Handle input while editing the search term.
///
/// Every edit applies immediately and resets to page 1. ENTER keeps the
/// term and leaves editing; ESC clears it.
fn handle_search_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Char(c) => {
            if app.view_state.search.len() < MAX_SEARCH_LENGTH {
                let mut term = app.view_state.search.clone();
                term.push(c);
                app.view_state.set_search(term);
                app.clamp_selection();
            } else {
                app.set_status(format!(
                    "Search term too long (max {} chars)",
                    MAX_SEARCH_LENGTH
                ));
            }
        }
        KeyCode::Backspace => {
            let mut term = app.view_state.search.clone();
            term.pop();
            app.view_state.set_search(term);
            app.clamp_selection();
        }
        KeyCode::Enter => {
            app.search_mode = false;
        }
        KeyCode::Esc => {
            app.search_mode = false;
            app.view_state.set_search("");
            app.clamp_selection();
        }
        _ => {}
    }
    Action::Continue
}

/// Handle input in the profile view.
fn handle_profile_input(
    app: &mut App,
    code: KeyCode,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    match code {
        KeyCode::Char('q') => return Ok(Action::Quit),
        KeyCode::Esc | KeyCode::Char('d') | KeyCode::Backspace => {
            app.back_to_dashboard();
        }
        KeyCode::Char('r') => {
            app.reload_user(event_tx);
            app.set_status("Reloading profile...");
        }
        KeyCode::Char('t') => {
            let name = app.cycle_theme();
            app.set_status(format!("Theme: {}", name));
        }
        _ => {}
    }
    Ok(Action::Continue)
}
