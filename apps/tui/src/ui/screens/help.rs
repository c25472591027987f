use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(70, 80, area);
    f.render_widget(Clear, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(TextLine::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };

    f.render_widget(hint, hint_area);
}

fn shortcut(key: &'static str, description: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("  {key:<12}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(description),
    ])
}

fn section(title: &'static str) -> TextLine<'static> {
    TextLine::from(Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "COVID-19 Global Data Dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(
            "Global numbers and the map always cover every country. The bar chart and table follow the filter; an empty filter shows everything.",
        ),
        TextLine::from(""),
        section("General:"),
        shortcut("? / F1", "Toggle this help"),
        shortcut("Tab", "Switch focus between filter and table"),
        shortcut("r", "Refetch now, ignoring the cache"),
        shortcut("q", "Quit"),
        TextLine::from(""),
        section("Filter:"),
        shortcut("Up/Down j/k", "Move"),
        shortcut("Space/Enter", "Select or deselect country"),
        shortcut("/", "Search countries, Esc to clear"),
        shortcut("a", "Select every listed country"),
        shortcut("c", "Clear selection"),
        shortcut("d", "Restore default countries"),
        TextLine::from(""),
        section("Table:"),
        shortcut("Up/Down j/k", "Scroll rows"),
        shortcut("PgUp/PgDn", "Scroll a page"),
        shortcut("s / S", "Next / previous sort column"),
        shortcut("o", "Flip sort order"),
        TextLine::from(""),
        section("CLI Options:"),
    ];

    let help_text = crate::cli::CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(TextLine::from(line.to_string()));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(70, 80, area);
        assert_eq!(popup.width, 70);
        assert_eq!(popup.height, 40);
        assert_eq!(popup.x, 15);
        assert_eq!(popup.y, 5);
    }

    #[test]
    fn test_help_lists_cli_flags() {
        let text: String = build_help_lines()
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.to_string()))
            .collect();
        assert!(text.contains("--headless"));
        assert!(text.contains("Restore default countries"));
    }
}
