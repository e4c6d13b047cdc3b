use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const BRAND: &str = "✈ farewatch";

/// Fixed top bar: brand mark on the left, one control per tab to its right.
/// Exactly the tab at `active` gets the active treatment; the rest render
/// muted.
pub fn render_nav_bar(frame: &mut Frame, area: Rect, tab_labels: &[&str], active: usize) {
    let mut spans = vec![
        Span::styled(BRAND, Style::default().fg(Color::Cyan).bold()),
        Span::raw("   "),
    ];

    for (i, label) in tab_labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().dim()));
        }
        let style = if i == active {
            Style::default().fg(Color::Cyan).bold().underlined()
        } else {
            Style::default().dim()
        };
        spans.push(Span::styled(*label, style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
