use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::SearchStep;
use crate::core::airports::AIRPORTS;

/// Everything the search panel needs from the app, borrowed for one frame.
pub struct SearchView<'a> {
    pub step: SearchStep,
    pub airport_query: &'a str,
    pub suggestions: &'a [usize],
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub origin_code: &'a str,
    pub destination_code: &'a str,
    pub depart_input: &'a str,
    pub return_input: &'a str,
    pub ceiling_input: &'a str,
    pub built_url: Option<&'a str>,
    pub error: Option<&'a str>,
    pub notice: Option<&'a str>,
}

pub fn render_search_panel(frame: &mut Frame, area: Rect, view: &SearchView) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // route summary
        Constraint::Length(1), // message line
        Constraint::Length(1), // input prompt
        Constraint::Min(1),    // suggestions / url
    ])
    .split(area);

    frame.render_widget(Paragraph::new(summary_line(view)), chunks[0]);
    frame.render_widget(Paragraph::new(message_line(view)), chunks[1]);

    match view.step {
        SearchStep::PickOrigin | SearchStep::PickDestination => {
            render_prompt(frame, chunks[2], view.airport_query);
            render_suggestions(frame, chunks[3], view);
        }
        SearchStep::DepartDate => {
            render_prompt(frame, chunks[2], view.depart_input);
        }
        SearchStep::ReturnDate => {
            render_prompt(frame, chunks[2], view.return_input);
        }
        SearchStep::AlertCeiling => {
            render_prompt(frame, chunks[2], view.ceiling_input);
        }
        SearchStep::Ready => {
            if let Some(url) = view.built_url {
                let lines = vec![
                    Line::from(Span::styled(
                        "Search ready.",
                        Style::default().fg(Color::Green).bold(),
                    )),
                    Line::from(Span::styled(url, Style::default().fg(Color::Blue))),
                ];
                frame.render_widget(Paragraph::new(Text::from(lines)), chunks[3]);
            }
        }
    }
}

fn summary_line(view: &SearchView) -> Line<'static> {
    let field = |label: &str, value: &str, active: bool| -> Vec<Span<'static>> {
        let value = if value.is_empty() { "···" } else { value };
        let value_style = if active {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default()
        };
        vec![
            Span::styled(format!("{label} "), Style::default().dim()),
            Span::styled(value.to_string(), value_style),
            Span::raw("   "),
        ]
    };

    let mut spans = Vec::new();
    spans.extend(field(
        "From",
        view.origin_code,
        view.step == SearchStep::PickOrigin,
    ));
    spans.extend(field(
        "To",
        view.destination_code,
        view.step == SearchStep::PickDestination,
    ));
    spans.extend(field(
        "Depart",
        view.depart_input,
        view.step == SearchStep::DepartDate,
    ));
    spans.extend(field(
        "Return",
        view.return_input,
        view.step == SearchStep::ReturnDate,
    ));
    Line::from(spans)
}

fn message_line(view: &SearchView) -> Line<'static> {
    if let Some(error) = view.error {
        return Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        ));
    }
    if let Some(notice) = view.notice {
        return Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Green),
        ));
    }
    let hint = match view.step {
        SearchStep::PickOrigin => "Pick the departure airport",
        SearchStep::PickDestination => "Pick the destination airport",
        SearchStep::DepartDate => "Departure date (YYYY-MM-DD)",
        SearchStep::ReturnDate => "Return date (YYYY-MM-DD, empty for one-way)",
        SearchStep::AlertCeiling => "Alert me at or under (USD)",
        SearchStep::Ready => "⏎ opens the search in your browser",
    };
    Line::from(Span::styled(hint.to_string(), Style::default().dim()))
}

fn render_prompt(frame: &mut Frame, area: Rect, input: &str) {
    let display = format!("> {input}\u{2588}");
    let paragraph = Paragraph::new(display).style(Style::default().fg(Color::Cyan));
    frame.render_widget(paragraph, area);
}

fn render_suggestions(frame: &mut Frame, area: Rect, view: &SearchView) {
    let visible_height = area.height as usize;
    let mut lines: Vec<Line> = Vec::new();

    for (display_i, &airport_i) in view
        .suggestions
        .iter()
        .enumerate()
        .skip(view.scroll_offset)
        .take(visible_height)
    {
        let airport = &AIRPORTS[airport_i];
        let is_selected = display_i == view.selected_index;
        let cursor = if is_selected { "❯ " } else { "  " };

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
                format!("{:<5}", airport.code),
                if is_selected {
                    Style::default().fg(Color::Cyan).bold()
                } else {
                    Style::default().fg(Color::Cyan)
                },
            ),
            Span::styled(format!("{:<16}", airport.city), Style::default()),
            Span::styled(airport.name, Style::default().fg(Color::DarkGray)),
        ]);
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}
