use crate::format::thousands;
use crate::view::GlobalMetrics;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// "Global Numbers": three cards, always computed over the whole snapshot
pub fn render_global_metrics(metrics: &GlobalMetrics, f: &mut Frame<'_>, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let entries = [
        ("Total Confirmed", metrics.total_confirmed, Color::Yellow),
        ("Total Deaths", metrics.total_deaths, Color::Red),
        ("Total Recovered", metrics.total_recovered, Color::Green),
    ];

    for ((label, value, color), card) in entries.into_iter().zip(cards.iter()) {
        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let paragraph = Paragraph::new(TextLine::from(Span::styled(
            thousands(value),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .block(block)
        .alignment(Alignment::Center);
        f.render_widget(paragraph, *card);
    }
}
