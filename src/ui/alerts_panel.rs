use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::core::fares::format_usd;

/// One alert prepared for display, with its trigger state already resolved
/// against the search history.
pub struct AlertRow {
    pub route_label: String,
    pub ceiling_usd: u32,
    pub paused: bool,
    pub best_price_usd: Option<u32>,
    pub triggered: bool,
}

pub fn render_alerts_panel(
    frame: &mut Frame,
    area: Rect,
    rows: &[AlertRow],
    selected_index: usize,
    scroll_offset: usize,
) {
    if rows.is_empty() {
        let empty = Paragraph::new("No fare alerts yet. Press w on a ready search to add one.")
            .style(Style::default().dim());
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    let mut lines: Vec<Line> = Vec::new();

    for (display_i, row) in rows
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
    {
        let is_selected = display_i == selected_index;
        let cursor = if is_selected { "❯ " } else { "  " };

        let marker = if row.paused {
            Span::styled("⏸ ", Style::default().dim())
        } else if row.triggered {
            Span::styled("▼ ", Style::default().fg(Color::Green).bold())
        } else {
            Span::raw("  ")
        };

        let label_style = if row.paused {
            Style::default().dim()
        } else if is_selected {
            Style::default().bold()
        } else {
            Style::default()
        };

        let best = match row.best_price_usd {
            Some(price) => format!("seen {}", format_usd(price)),
            None => "no fare logged".to_string(),
        };

        let line = Line::from(vec![
            Span::styled(
                cursor,
                if is_selected {
                    Style::default().bold()
                } else {
                    Style::default()
                },
            ),
            marker,
            Span::styled(format!("{:<40}", row.route_label), label_style),
            Span::styled(
                format!("≤ {:<8}", format_usd(row.ceiling_usd)),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                best,
                if row.triggered {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::DarkGray)
                },
            ),
        ]);
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}
