use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::core::fares::format_usd;
use crate::store::history::SearchRecord;

pub fn render_history_panel(
    frame: &mut Frame,
    area: Rect,
    history: &[SearchRecord],
    filtered_indices: &[usize],
    selected_index: usize,
    scroll_offset: usize,
    filter_query: &str,
    fare_prompt: Option<(&str, &str)>,
) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // filter / price prompt
        Constraint::Min(1),    // records
    ])
    .split(area);

    // Fare entry borrows the prompt line while active
    let prompt = match fare_prompt {
        Some((label, input)) => Paragraph::new(format!("{label}: {input}\u{2588}"))
            .style(Style::default().fg(Color::Yellow)),
        None => Paragraph::new(format!("> {filter_query}\u{2588}"))
            .style(Style::default().fg(Color::Cyan)),
    };
    frame.render_widget(prompt, chunks[0]);

    if history.is_empty() {
        let empty = Paragraph::new("No searches launched yet.").style(Style::default().dim());
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let visible_height = chunks[1].height as usize;
    let mut lines: Vec<Line> = Vec::new();

    for (display_i, &record_i) in filtered_indices
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
    {
        let record = &history[record_i];
        let is_selected = display_i == selected_index;
        let cursor = if is_selected { "❯ " } else { "  " };

        let price = match record.best_price_usd {
            Some(usd) => format_usd(usd),
            None => "—".to_string(),
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
            Span::styled(
                format!("{:<40}", record.route_label),
                if is_selected {
                    Style::default().bold()
                } else {
                    Style::default()
                },
            ),
            Span::styled(format!("{:<8}", price), Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{:<16}", record.airline.as_deref().unwrap_or("")),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("×{}", record.count),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(Text::from(lines)), chunks[1]);
}
