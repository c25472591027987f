use crate::app::{App, Focus};
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// The country multi-select
pub fn render_country_filter(app: &App, f: &mut Frame<'_>, area: Rect) {
    let focused = app.focus == Focus::Sidebar;
    let block = Block::default()
        .title(format!("Filter Data: {} selected", app.selection.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Yellow } else { Color::Cyan }));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    render_search_line(app, f, split[0]);

    let options = app.visible_options();
    if options.is_empty() {
        let message = if app.options.is_empty() {
            "No countries available"
        } else {
            "No matches"
        };
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, split[1]);
        return;
    }

    let max_visible_rows = split[1].height as usize;
    let offset = scroll_offset(options.len(), max_visible_rows, app.sidebar_index);

    let lines: Vec<TextLine<'_>> = options
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(i, name)| {
            let checked = app.selection.contains(name);
            let highlighted = i == app.sidebar_index;
            let style = match (highlighted && focused, checked) {
                (true, _) => Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                (false, true) => Style::default().fg(Color::Green),
                (false, false) => Style::default().fg(Color::White),
            };
            let mark = if checked { "[x] " } else { "[ ] " };
            TextLine::from(vec![Span::styled(mark, style), Span::styled(*name, style)])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), split[1]);
}

fn render_search_line(app: &App, f: &mut Frame<'_>, area: Rect) {
    let line = if app.searching {
        TextLine::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::Yellow)),
            Span::raw(app.search.clone()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ])
    } else if app.search.is_empty() {
        TextLine::from(Span::styled(
            "Press / to search",
            Style::default().fg(Color::Gray),
        ))
    } else {
        TextLine::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::Gray)),
            Span::raw(app.search.clone()),
        ])
    };

    f.render_widget(Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM)), area);
}
