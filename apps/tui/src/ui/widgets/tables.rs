use crate::app::{App, Focus};
use crate::view::{SortColumn, TableRow, TABLE_COLUMNS};
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    0
}

fn header_label(column: SortColumn, app: &App) -> String {
    let label = column.label();
    if app.table_sort.column == column {
        let arrow = if app.table_sort.descending { "▼" } else { "▲" };
        format!("{label} {arrow}")
    } else {
        label.to_string()
    }
}

pub fn render_data_table(app: &App, rows: &[TableRow<'_>], f: &mut Frame<'_>, area: Rect) {
    let focused = app.focus == Focus::Table;
    let border_color = if focused { Color::Yellow } else { Color::Cyan };
    let block = Block::default()
        .title(format!("Raw Data Table (Filtered) - {} rows", rows.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if rows.is_empty() {
        let paragraph = Paragraph::new("No rows to show")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(
        SortColumn::ALL
            .iter()
            .map(|column| Cell::from(header_label(*column, app)))
            .collect::<Vec<_>>(),
    )
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    // Borders plus header row
    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let selected = app.table_index.min(rows.len() - 1);
    let offset = scroll_offset(rows.len(), max_visible_rows, selected);

    let body = rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(i, row)| {
            let style = if focused && i == selected {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let [country, confirmed, deaths, recovered] = row.cells();
            Row::new(vec![
                Cell::from(country),
                Cell::from(TextLine::from(confirmed).alignment(Alignment::Right)),
                Cell::from(TextLine::from(deaths).alignment(Alignment::Right)),
                Cell::from(TextLine::from(recovered).alignment(Alignment::Right)),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Min(16),
        Constraint::Length(16),
        Constraint::Length(14),
        Constraint::Length(16),
    ];
    debug_assert_eq!(widths.len(), TABLE_COLUMNS.len());

    let table = Table::new(body, widths)
        .header(header)
        .block(block)
        .column_spacing(1);

    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::{loaded_app, PAYLOAD};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(5, 10, 4), 0);
        assert_eq!(scroll_offset(30, 10, 3), 0);
        assert_eq!(scroll_offset(30, 10, 10), 1);
        assert_eq!(scroll_offset(30, 10, 29), 20);
    }

    #[tokio::test]
    async fn test_stale_cursor_still_draws_rows() -> Result<(), Box<dyn std::error::Error>> {
        let (mut app, _file) = loaded_app(PAYLOAD).await?;
        app.focus = Focus::Table;
        app.table_index = 39;

        let view = app.view();
        let mut terminal = Terminal::new(TestBackend::new(80, 8))?;
        terminal.draw(|f| render_data_table(&app, &view.table, f, f.area()))?;

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Brazil"));
        assert!(screen.contains("United States"));
        Ok(())
    }
}
