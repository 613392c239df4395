//! Read-only user profile card.
//!
//! Fetched once on first entry to the view; renders an initials avatar,
//! the user's name and email, and a labeled field grid. No editing.

use crate::api::User;
use crate::app::{App, LoadState};
use crate::util::initials;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the profile panel.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border"))
        .title(" Profile ");

    match &app.user {
        LoadState::Idle | LoadState::Loading => {
            let paragraph = Paragraph::new("Loading...")
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
        LoadState::Ready(user) => render_card(f, app, area, block, user),
    }
}

/// Render the user card centered in the panel.
fn render_card(f: &mut Frame, app: &App, area: Rect, panel: Block, user: &User) {
    f.render_widget(panel, area);

    let avatar = initials(&user.name);

    let label = app.style("profile_label");
    let value = app.style("profile_value");

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", avatar), app.style("profile_avatar")),
            Span::raw("  "),
            Span::styled(user.name.clone(), app.style("profile_name")),
        ]),
        Line::from(Span::styled(user.email.clone(), label)),
        Line::default(),
    ];

    let fields = [
        ("User ID", user.id.to_string()),
        ("Name", user.name.clone()),
        ("Email", user.email.clone()),
        ("Address", user.address.single_line()),
        ("Phone", user.phone.clone()),
    ];
    for (name, content) in fields {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>10}: ", name), label),
            Span::styled(content, value),
        ]));
    }

    // Center the card within the panel
    let card_height = lines.len() as u16 + 2;
    let card_width = 60u16.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(card_width)) / 2;
    let y = area.y + (area.height.saturating_sub(card_height)) / 2;
    let card = Rect::new(
        x,
        y,
        card_width,
        card_height.min(area.height),
    );

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border_focused"))
        .title(format!(" Welcome, {} ", user.name));

    if card.width < 20 || card.height < 5 {
        // Too cramped for the card chrome; render the lines bare
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    f.render_widget(Paragraph::new(lines).block(outer), card);
}
