//! Records table and pagination controls.
//!
//! Renders the visible page produced by the view pipeline, with sort
//! indicators on the sortable headers and a highlighted sorted column.
//! The loading, failed, and no-matches states render in place of rows —
//! a failed load never renders a table.

use crate::app::{App, LoadState};
use crate::util::{flatten_whitespace, truncate_to_width};
use crate::view::{pagination_window, SortKey};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Braille spinner frames for the loading state.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Sortable columns in header order, paired with their toggle keys.
const SORTABLE: [(SortKey, &str); 3] = [
    (SortKey::PostId, "1"),
    (SortKey::Name, "2"),
    (SortKey::Email, "3"),
];

/// Render the records panel.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    // Border lights up while the search term is being edited
    let border_style = if app.search_mode {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(panel_title(app));

    match &app.records {
        LoadState::Idle | LoadState::Loading => {
            let spinner = SPINNER[app.spinner_frame % SPINNER.len()];
            let text = format!("{} Loading records...", spinner);
            let paragraph = Paragraph::new(text)
                .style(app.style("loading_text"))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(paragraph, area);
        }
        LoadState::Failed(message) => {
            let text = format!("Error: {}\n\nPress [r] to retry.", message);
            let paragraph = Paragraph::new(text)
                .style(app.style("error_text"))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(paragraph, area);
        }
        LoadState::Ready(_) => render_table(f, app, area, block),
    }
}

fn panel_title(app: &App) -> String {
    if app.search_mode {
        return format!("Search: {}_", app.view_state.search);
    }
    match (&app.records, app.page_view()) {
        (LoadState::Ready(records), Some(view)) => {
            if app.view_state.search.is_empty() {
                format!("Records ({})", records.len())
            } else {
                format!(
                    "Records ({} of {} match \"{}\")",
                    view.filtered_count,
                    records.len(),
                    app.view_state.search
                )
            }
        }
        _ => "Records".to_string(),
    }
}

fn render_table(f: &mut Frame, app: &App, area: Rect, block: Block) {
    let Some(view) = app.page_view() else {
        return;
    };

    if view.rows.is_empty() {
        let paragraph = Paragraph::new("No matching records")
            .style(app.style("table_empty"))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let sort = app.view_state.sort;

    // Sortable headers carry their toggle key and direction indicator
    let mut header_cells: Vec<Cell> = SORTABLE
        .iter()
        .map(|(key, hotkey)| {
            let style = if sort.key() == Some(*key) {
                app.style("table_header_sorted")
            } else {
                app.style("table_header")
            };
            Cell::from(format!("[{}] {}{}", hotkey, key.label(), sort.indicator(*key)))
                .style(style)
        })
        .collect();
    header_cells.push(Cell::from("Comment").style(app.style("table_header")));
    let header = Row::new(header_cells).height(1);

    // Room left for the body column after the three fixed-ish columns
    let body_width = (area.width as usize).saturating_sub(2 + 10 + 22 + 30);

    let rows: Vec<Row> = view
        .rows
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let selected = i == app.selected_row;
            let cell_style = |key: SortKey| {
                if selected {
                    app.style("table_row_selected")
                } else if sort.key() == Some(key) {
                    app.style("table_cell_sorted")
                } else {
                    app.style("table_row")
                }
            };
            let body_style = if selected {
                app.style("table_row_selected")
            } else {
                app.style("table_row")
            };

            let body = flatten_whitespace(&record.body);
            let body = truncate_to_width(&body, body_width).into_owned();

            Row::new(vec![
                Cell::from(record.post_id.to_string()).style(cell_style(SortKey::PostId)),
                Cell::from(truncate_to_width(&record.name, 20).into_owned())
                    .style(cell_style(SortKey::Name)),
                Cell::from(truncate_to_width(&record.email, 28).into_owned())
                    .style(cell_style(SortKey::Email)),
                Cell::from(body).style(body_style),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(22),
            Constraint::Length(30),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(block);

    f.render_widget(table, area);
}

/// Render the pagination controls line.
///
/// Prev/Next render dimmed when they would be no-ops; a window of page
/// numbers (current ± 1) sits between them, followed by the page-size
/// setting and totals.
pub(super) fn render_pagination(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }
    let Some(view) = app.page_view() else {
        return;
    };

    let page = app.view_state.page;
    let total = view.total_pages;

    let mut spans: Vec<Span> = Vec::new();

    let prev_style = if page <= 1 {
        app.style("page_nav_disabled")
    } else {
        app.style("page_nav")
    };
    spans.push(Span::styled(" ◀ Prev ", prev_style));

    for number in pagination_window(page, total) {
        let style = if number == page {
            app.style("page_current")
        } else {
            app.style("page_number")
        };
        spans.push(Span::styled(format!(" {} ", number), style));
    }

    let next_style = if total == 0 || page >= total {
        app.style("page_nav_disabled")
    } else {
        app.style("page_nav")
    };
    spans.push(Span::styled(" Next ▶ ", next_style));

    spans.push(Span::styled(
        format!(
            "  {}/page · Page {}/{} · {} matching",
            app.view_state.page_size.count(),
            page.min(total.max(1)),
            total,
            view.filtered_count
        ),
        app.style("table_empty"),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
