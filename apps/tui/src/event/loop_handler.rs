use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use serde::Serialize;
use std::time::Duration;

use crate::app::{handle_input, App};
use crate::format::thousands;
use crate::terminal::DashboardTerminal;
use crate::ui;
use crate::view::{GlobalMetrics, MapPoint, TableRow};

/// Everything headless mode prints, in both text and JSON form
#[derive(Debug, Serialize)]
struct HeadlessReport<'a> {
    source: &'a str,
    fetched_at: Option<String>,
    error: Option<&'a str>,
    metrics: GlobalMetrics,
    selection: Vec<&'a str>,
    map_top: Vec<MapPoint<'a>>,
    table: Vec<TableRow<'a>>,
}

fn build_headless_report(app: &App) -> HeadlessReport<'_> {
    let view = app.view();
    let fetched_at = (!app.snapshot.is_empty()).then(|| app.snapshot.fetched_at().to_rfc3339());

    HeadlessReport {
        source: app.loader.source(),
        fetched_at,
        error: app.load_error.as_deref(),
        metrics: view.metrics,
        selection: app.selection.iter().collect(),
        map_top: view.map,
        table: view.table,
    }
}

fn render_headless_text(report: &HeadlessReport<'_>) -> String {
    let mut lines = vec![
        String::new(),
        "COVID-19 Global Data Dashboard".to_string(),
        "==============================".to_string(),
        format!("Source: {}", report.source),
    ];
    if let Some(fetched_at) = &report.fetched_at {
        lines.push(format!("Fetched: {fetched_at}"));
    }
    if let Some(error) = report.error {
        lines.push(format!("Error fetching data: {error}"));
    }

    lines.push("\nGlobal Numbers:".to_string());
    lines.push(format!("- Total Confirmed: {}", thousands(report.metrics.total_confirmed)));
    lines.push(format!("- Total Deaths: {}", thousands(report.metrics.total_deaths)));
    lines.push(format!("- Total Recovered: {}", thousands(report.metrics.total_recovered)));

    lines.push(format!("\nTop {} Countries by Cases:", report.map_top.len()));
    lines.extend(report.map_top.iter().enumerate().map(|(rank, point)| {
        format!(
            "{:>3}. {} ({}) {}",
            rank + 1,
            point.country,
            point.country_code,
            thousands(point.confirmed)
        )
    }));

    let selection = if report.selection.is_empty() {
        "all countries".to_string()
    } else {
        report.selection.join(", ")
    };
    lines.push(format!("\nRaw Data Table ({selection}):"));
    lines.extend(report.table.iter().map(|row| {
        let [country, confirmed, deaths, recovered] = row.cells();
        format!("- {country} | {confirmed} | {deaths} | {recovered}")
    }));

    lines.join("\n")
}

/// Load once through the cache, print, and exit
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    app.reload().await;
    let report = build_headless_report(app);

    if json {
        let json = serde_json::to_string_pretty(&report)?;
        println!("{json}");
    } else {
        println!("{}", render_headless_text(&report));
    }

    Ok(())
}

/// Run the main application event loop
pub async fn run(terminal: &mut DashboardTerminal, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        terminal
            .draw(|f| ui::ui(app, f))
            .map_err(|e| eyre!("Terminal draw error: {e}"))?;

        if !matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                handle_input(app, key.code);
                if !app.running {
                    break;
                }

                // Every interaction re-derives the dashboard, going through the cache
                let will_fetch = app.refresh_requested || app.loader.cache_remaining().is_none();
                if will_fetch {
                    tracing::debug!(forced = app.refresh_requested, "fetching before redraw");
                    if let Err(e) = terminal.draw(|f| ui::loading(app, f)) {
                        tracing::warn!(error = %e, "failed to draw loading frame");
                    }
                }

                if app.refresh_requested {
                    app.force_refresh().await;
                } else {
                    app.reload().await;
                }
            }
            Ok(_) => {
                // Resize and the rest just fall through to the next redraw
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read terminal event");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::{loaded_app, PAYLOAD};

    #[tokio::test]
    async fn test_headless_report_uses_defaults_and_full_map() -> Result<(), std::io::Error> {
        let (app, _file) = loaded_app(PAYLOAD).await?;
        let report = build_headless_report(&app);

        assert_eq!(report.metrics.total_confirmed, 650);
        assert_eq!(report.map_top.len(), 4);
        assert_eq!(report.map_top[0].country, "United States");
        assert_eq!(report.table.len(), 3);
        assert!(report.table.iter().all(|row| row.country != "Chile"));
        assert!(report.error.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_headless_text_lists_sections() -> Result<(), std::io::Error> {
        let (app, _file) = loaded_app(PAYLOAD).await?;
        let text = render_headless_text(&build_headless_report(&app));

        assert!(text.contains("Total Confirmed: 650"));
        assert!(text.contains("Top 4 Countries by Cases:"));
        assert!(text.contains("- United States | 300 | 30 | 200"));
        Ok(())
    }

    #[tokio::test]
    async fn test_headless_text_after_failed_load() -> Result<(), std::io::Error> {
        let (app, _file) = loaded_app("{not json").await?;
        let text = render_headless_text(&build_headless_report(&app));

        assert!(text.contains("Error fetching data: Failed to decode data"));
        assert!(text.contains("- Total Confirmed: 0"));
        assert!(text.contains("Top 0 Countries by Cases:"));
        assert!(text.ends_with("Raw Data Table (all countries):"));
        Ok(())
    }

    #[tokio::test]
    async fn test_headless_json_has_pascal_case_rows() -> Result<(), Box<dyn std::error::Error>> {
        let (app, _file) = loaded_app(PAYLOAD).await?;
        let json = serde_json::to_value(build_headless_report(&app))?;

        assert_eq!(json["metrics"]["total_deaths"], 65);
        assert_eq!(json["table"][0]["Country"], "United States");
        assert_eq!(json["table"][0]["TotalConfirmed"], 300);
        Ok(())
    }
}
