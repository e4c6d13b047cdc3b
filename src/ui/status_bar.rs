use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Tab;

pub fn render_status_bar(frame: &mut Frame, area: Rect, tab: Tab) {
    let mut hints: Vec<(&str, &str)> = vec![("◀ ▶", "tab")];
    match tab {
        Tab::Search => {
            hints.push(("⏎", "next/open"));
            hints.push(("w", "watch fare"));
            hints.push(("⎋", "back/quit"));
        }
        Tab::Alerts => {
            hints.push(("↑↓", "navigate"));
            hints.push(("␣", "pause"));
            hints.push(("d", "remove"));
            hints.push(("⏎", "load route"));
            hints.push(("⎋", "quit"));
        }
        Tab::History => {
            hints.push(("↑↓", "navigate"));
            hints.push(("␣", "log fare"));
            hints.push(("⌦", "remove"));
            hints.push(("⏎", "load route"));
            hints.push(("⎋", "quit"));
        }
    }

    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(format!(" {key} "), Style::default().bold()));
        spans.push(Span::raw(format!("{action}  ")));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().dim()),
        area,
    );
}
