use crate::format::{compact, thousands};
use crate::geo::locate;
use crate::view::MapPoint;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Map, MapResolution};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const MAX_RADIUS_DEGREES: f64 = 9.0;
const MIN_RADIUS_DEGREES: f64 = 1.0;
/// Only the largest markers get a text label; the rest would overlap
const LABELLED_MARKERS: usize = 5;

/// A map point resolved to canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker<'a> {
    pub country: &'a str,
    pub longitude: f64,
    pub latitude: f64,
    pub radius: f64,
    pub color: Color,
    pub confirmed: u64,
}

/// Yellow for the smallest counts through to red for the largest
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn intensity_color(value: u64, max: u64) -> Color {
    if max == 0 {
        return Color::Rgb(255, 220, 0);
    }
    let ratio = (value as f64 / max as f64).clamp(0.0, 1.0);
    let green = (220.0 * (1.0 - ratio)).round();
    Color::Rgb(255, green as u8, 0)
}

/// Marker radius in degrees; area grows with the case count
pub fn marker_radius(value: u64, max: u64) -> f64 {
    if max == 0 {
        return MIN_RADIUS_DEGREES;
    }
    let ratio = (value as f64 / max as f64).clamp(0.0, 1.0);
    (MAX_RADIUS_DEGREES * ratio.sqrt()).max(MIN_RADIUS_DEGREES)
}

/// Splits points into drawable markers and those with no known centroid
pub fn place_markers<'a>(points: &[MapPoint<'a>]) -> (Vec<MapMarker<'a>>, Vec<&'a str>) {
    let max = points.iter().map(|p| p.confirmed).max().unwrap_or(0);
    let mut placed = Vec::with_capacity(points.len());
    let mut unplaced = Vec::new();

    for point in points {
        match locate(point.country_code) {
            Some(centroid) => placed.push(MapMarker {
                country: point.country,
                longitude: centroid.longitude,
                latitude: centroid.latitude,
                radius: marker_radius(point.confirmed, max),
                color: intensity_color(point.confirmed, max),
                confirmed: point.confirmed,
            }),
            None => unplaced.push(point.country),
        }
    }

    (placed, unplaced)
}

pub fn render_world_map(points: &[MapPoint<'_>], f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Map View (Top 20 Countries by Cases)")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if points.is_empty() {
        let paragraph = Paragraph::new("No data to map")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(inner);

    let (markers, unplaced) = place_markers(points);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-180.0, 180.0])
        .y_bounds([-90.0, 90.0])
        .paint(|ctx| {
            ctx.draw(&Map {
                color: Color::DarkGray,
                resolution: MapResolution::High,
            });
            ctx.layer();

            // Smallest last so they stay visible on top of the big ones
            for marker in &markers {
                ctx.draw(&Circle {
                    x: marker.longitude,
                    y: marker.latitude,
                    radius: marker.radius,
                    color: marker.color,
                });
            }

            for marker in markers.iter().take(LABELLED_MARKERS) {
                ctx.print(
                    marker.longitude,
                    marker.latitude,
                    Span::styled(
                        marker.country.to_string(),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    f.render_widget(canvas, split[0]);
    render_map_legend(points, &unplaced, f, split[1]);
}

fn render_map_legend(points: &[MapPoint<'_>], unplaced: &[&str], f: &mut Frame<'_>, area: Rect) {
    let max = points.iter().map(|p| p.confirmed).max().unwrap_or(0);

    let mut lines: Vec<TextLine<'_>> = points
        .iter()
        .enumerate()
        .map(|(rank, point)| {
            let missing = unplaced.contains(&point.country);
            let name_style = if missing {
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC)
            } else {
                Style::default().fg(intensity_color(point.confirmed, max))
            };
            TextLine::from(vec![
                Span::styled(format!("{:>2}. ", rank + 1), Style::default().fg(Color::Gray)),
                Span::styled(point.country.to_string(), name_style),
                Span::raw(format!(" {}", compact(point.confirmed))),
            ])
        })
        .collect();

    if !unplaced.is_empty() {
        lines.push(TextLine::from(""));
        lines.push(TextLine::from(Span::styled(
            format!("{} unplaced (unknown code)", unplaced.len()),
            Style::default().fg(Color::Gray),
        )));
    }

    if let Some(top) = points.first() {
        lines.push(TextLine::from(Span::styled(
            format!("Max: {}", thousands(top.confirmed)),
            Style::default().fg(Color::Gray),
        )));
    }

    let legend = Paragraph::new(lines).block(Block::default().borders(Borders::LEFT));
    f.render_widget(legend, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point<'a>(country: &'a str, code: &'a str, confirmed: u64) -> MapPoint<'a> {
        MapPoint {
            country,
            country_code: code,
            confirmed,
        }
    }

    #[test]
    fn test_place_markers_splits_unknown_codes() {
        let points = vec![
            point("United States", "USA", 1000),
            point("India", "IN", 250),
            point("Atlantis", "ATL", 10),
        ];

        let (placed, unplaced) = place_markers(&points);
        assert_eq!(placed.len(), 2);
        assert_eq!(unplaced, vec!["Atlantis"]);
        assert!((placed[0].radius - MAX_RADIUS_DEGREES).abs() < f64::EPSILON);
        assert!(placed[1].radius < placed[0].radius);
    }

    #[test]
    fn test_intensity_color_ends() {
        assert_eq!(intensity_color(100, 100), Color::Rgb(255, 0, 0));
        assert_eq!(intensity_color(0, 100), Color::Rgb(255, 220, 0));
        assert_eq!(intensity_color(5, 0), Color::Rgb(255, 220, 0));
    }

    #[test]
    fn test_marker_radius_has_floor() {
        assert!((marker_radius(1, 1_000_000) - MIN_RADIUS_DEGREES).abs() < f64::EPSILON);
        assert!((marker_radius(250, 1000) - 4.5).abs() < 1e-9);
    }
}
