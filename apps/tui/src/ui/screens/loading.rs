use crate::ui::screens::help::centered_rect;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, ThrobberState, WhichUse, BRAILLE_SIX};

/// Drawn once before a fetch that blocks the loop
pub fn render_loading(source: &str, f: &mut Frame<'_>) {
    let area = centered_rect(60, 20, f.area());
    let block = Block::default()
        .title("== COVID-19 Global Data Dashboard ==")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let throbber = Throbber::default()
        .label(format!("Fetching {source}..."))
        .style(Style::default().fg(Color::White))
        .throbber_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin);

    let line = Rect {
        x: inner.x + 1,
        y: inner.y + inner.height / 2,
        width: inner.width.saturating_sub(2),
        height: 1.min(inner.height),
    };
    f.render_stateful_widget(throbber, line, &mut ThrobberState::default());
}
