use crate::format::compact;
use crate::view::BarPoint;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

const BAR_GAP: u16 = 1;
const MIN_BAR_WIDTH: u16 = 5;
const MAX_BAR_WIDTH: u16 = 12;

/// One colour per bar, cycling like a categorical palette
pub const fn country_color(index: usize) -> Color {
    const PALETTE: [Color; 8] = [
        Color::Rgb(99, 110, 250),
        Color::Rgb(239, 85, 59),
        Color::Rgb(0, 204, 150),
        Color::Rgb(171, 99, 250),
        Color::Rgb(255, 161, 90),
        Color::Rgb(25, 211, 243),
        Color::Rgb(255, 102, 146),
        Color::Rgb(182, 232, 128),
    ];
    PALETTE[index % PALETTE.len()]
}

/// How many bars of what width fit in `inner_width` columns
pub fn bar_layout(inner_width: u16, count: usize) -> (usize, u16) {
    if count == 0 || inner_width == 0 {
        return (0, MIN_BAR_WIDTH);
    }

    let count_u16 = u16::try_from(count).unwrap_or(u16::MAX);
    let ideal = inner_width.saturating_sub(BAR_GAP.saturating_mul(count_u16)) / count_u16;
    let width = ideal.clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH);
    let fits = usize::from((inner_width + BAR_GAP) / (width + BAR_GAP));
    (fits.min(count), width)
}

pub fn render_cases_barchart(points: &[BarPoint<'_>], f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if points.is_empty() {
        let paragraph = Paragraph::new("No countries to chart")
            .block(block.title("Cases by Country (Selected)"))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let (shown, bar_width) = bar_layout(area.width.saturating_sub(2), points.len());
    let title = if shown < points.len() {
        format!(
            "Total Confirmed COVID-19 Cases by Country (showing {shown} of {})",
            points.len()
        )
    } else {
        "Total Confirmed COVID-19 Cases by Country".to_string()
    };

    let bars: Vec<Bar<'_>> = points
        .iter()
        .take(shown)
        .enumerate()
        .map(|(index, point)| {
            Bar::default()
                .value(point.confirmed)
                .text_value(compact(point.confirmed))
                .label(TextLine::from(point.country))
                .style(Style::default().fg(country_color(index)))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(country_color(index))
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let max_value = points
        .iter()
        .take(shown)
        .map(|point| point.confirmed)
        .max()
        .unwrap_or(0)
        .max(1);

    let chart = BarChart::default()
        .block(block.title(title))
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_gap(BAR_GAP)
        .bar_width(bar_width);

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_layout_fits_few_bars() {
        let (shown, width) = bar_layout(100, 3);
        assert_eq!(shown, 3);
        assert_eq!(width, MAX_BAR_WIDTH);
    }

    #[test]
    fn test_bar_layout_truncates_many_bars() {
        let (shown, width) = bar_layout(60, 190);
        assert_eq!(width, MIN_BAR_WIDTH);
        assert_eq!(shown, 10);
    }

    #[test]
    fn test_bar_layout_empty() {
        assert_eq!(bar_layout(80, 0).0, 0);
        assert_eq!(bar_layout(0, 5).0, 0);
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(country_color(0), country_color(8));
    }
}
