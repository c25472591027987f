use crate::app::{App, Focus};
use crate::ui::screens::help::render_help_popup;
use crate::ui::widgets::charts::render_cases_barchart;
use crate::ui::widgets::map::render_world_map;
use crate::ui::widgets::metrics::render_global_metrics;
use crate::ui::widgets::sidebar::render_country_filter;
use crate::ui::widgets::tables::render_data_table;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use std::time::Duration;

const SIDEBAR_WIDTH: u16 = 30;

pub fn render_dashboard(app: &App, f: &mut Frame<'_>) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title area
            Constraint::Min(10),   // Sidebar and dashboard
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_title_section(app, f, main_layout[0]);
    render_body(app, f, main_layout[1]);
    render_status_section(app, f, main_layout[2]);
    render_shortcuts(app, f, main_layout[3]);

    if app.show_help {
        let area = f.area();
        render_help_popup(f, area);
    }
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .title("== COVID-19 Global Data Dashboard ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let fetched = if app.snapshot.is_empty() {
        "no data".to_string()
    } else {
        app.snapshot.fetched_at().format("%Y-%m-%d %H:%M:%S").to_string()
    };

    let cache = app
        .loader
        .cache_remaining()
        .map_or_else(|| "expired".to_string(), describe_remaining);

    let lines = vec![
        TextLine::from(Span::styled(
            "Live updates on COVID-19 cases around the world.",
            Style::default().fg(Color::White),
        )),
        TextLine::from(vec![
            Span::styled("Fetched: ", Style::default().fg(Color::Gray)),
            Span::raw(fetched),
            Span::styled(" | Source: ", Style::default().fg(Color::Gray)),
            Span::raw(app.loader.source().to_string()),
            Span::styled(" | Cache: ", Style::default().fg(Color::Gray)),
            Span::raw(cache),
        ]),
    ];

    let paragraph = Paragraph::new(Text::from(lines)).block(title_block);
    f.render_widget(paragraph, area);
}

fn describe_remaining(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{}m{:02}s left", secs / 60, secs % 60)
}

fn render_body(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
        .split(area);

    render_country_filter(app, f, columns[0]);

    let view = app.view();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(35),
            Constraint::Min(8),
        ])
        .split(columns[1]);

    render_global_metrics(&view.metrics, f, rows[0]);
    render_cases_barchart(&view.bars, f, rows[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[2]);

    render_world_map(&view.map, f, bottom[0]);
    render_data_table(app, &view.table, f, bottom[1]);
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let status_text = if let Some(error) = &app.load_error {
        Text::from(Span::styled(
            format!("Error fetching data: {error}"),
            Style::default().fg(Color::Red),
        ))
    } else if app.status_message.is_empty() {
        let origin = if app.last_load_cached {
            "cache"
        } else {
            "network"
        };
        Text::from(Span::styled(
            format!("{} countries loaded from {origin}", app.snapshot.len()),
            Style::default().fg(Color::Gray),
        ))
    } else {
        Text::from(Span::styled(
            app.status_message.as_str(),
            Style::default().fg(Color::Green),
        ))
    };

    let status_paragraph = Paragraph::new(status_text)
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(status_paragraph, area);
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let shortcuts = shortcuts_line(app.focus);
    let shortcuts_paragraph = Paragraph::new(shortcuts).alignment(Alignment::Center);
    f.render_widget(shortcuts_paragraph, area);
}

fn key_span(key: &'static str) -> Span<'static> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

fn hint_span(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::Gray))
}

fn shortcuts_line(focus: Focus) -> TextLine<'static> {
    let mut spans = vec![key_span("?"), hint_span(": Help | "), key_span("Tab")];
    spans.push(hint_span(": Focus | "));

    match focus {
        Focus::Sidebar => {
            spans.extend([
                key_span("Space"),
                hint_span(": Toggle | "),
                key_span("/"),
                hint_span(": Search | "),
                key_span("c/d/a"),
                hint_span(": Clear/Defaults/All | "),
            ]);
        }
        Focus::Table => {
            spans.extend([
                key_span("s"),
                hint_span(": Sort column | "),
                key_span("o"),
                hint_span(": Order | "),
            ]);
        }
    }

    spans.extend([
        key_span("r"),
        hint_span(": Refresh | "),
        key_span("q"),
        hint_span(": Quit"),
    ]);

    TextLine::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_remaining() {
        assert_eq!(describe_remaining(Duration::from_secs(599)), "9m59s left");
        assert_eq!(describe_remaining(Duration::from_secs(5)), "0m05s left");
    }

    #[test]
    fn test_shortcuts_follow_focus() {
        let sidebar: String = shortcuts_line(Focus::Sidebar)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        let table: String = shortcuts_line(Focus::Table)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();

        assert!(sidebar.contains("Search"));
        assert!(!table.contains("Search"));
        assert!(table.contains("Sort column"));
    }
}
