use crate::app::{App, View};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    // Guard against zero-width/height areas
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Use Cow to avoid allocations for static strings and borrowed messages
    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else {
        match app.view {
            View::Dashboard => {
                if app.search_mode {
                    Cow::Borrowed("Type to search | ESC clear | ENTER confirm")
                } else {
                    Cow::Borrowed(
                        "[/]search [1/2/3]sort [←/→]page [z]page-size [p]rofile [r]eload [t]heme [q]uit",
                    )
                }
            }
            View::Profile => Cow::Borrowed("[Esc]dashboard [r]eload [t]heme [q]uit"),
        }
    };

    let paragraph = Paragraph::new(text).style(app.style("status_bar"));
    f.render_widget(paragraph, area);
}
