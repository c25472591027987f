use color_eyre::eyre::WrapErr;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;

use crate::config::DashboardConfig;

const DEFAULT_LOG_FILE: &str = "covid_dashboard.log";

/// Where log lines go for a given run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Off,
}

/// The terminal UI owns stdout/stderr, so it only ever logs to a file.
pub fn log_target(config: &DashboardConfig, headless: bool) -> LogTarget {
    match (&config.log_file, headless, config.debug) {
        (Some(path), _, _) => LogTarget::File(path.clone()),
        (None, true, _) => LogTarget::Stderr,
        (None, false, true) => LogTarget::File(PathBuf::from(DEFAULT_LOG_FILE)),
        (None, false, false) => LogTarget::Off,
    }
}

pub fn init_logging(config: &DashboardConfig, headless: bool) -> color_eyre::Result<()> {
    let level = if config.debug { Level::DEBUG } else { Level::INFO };

    match log_target(config, headless) {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();
        }
        LogTarget::File(path) => {
            let file = open_log_file(&path)?;
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
    }

    Ok(())
}

fn open_log_file(path: &Path) -> color_eyre::Result<std::fs::File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("Failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_without_file_or_debug_is_silent() {
        let config = DashboardConfig::default();
        assert_eq!(log_target(&config, false), LogTarget::Off);
    }

    #[test]
    fn test_tui_debug_defaults_to_file() {
        let config = DashboardConfig {
            debug: true,
            ..DashboardConfig::default()
        };
        assert_eq!(
            log_target(&config, false),
            LogTarget::File(PathBuf::from(DEFAULT_LOG_FILE))
        );
    }

    #[test]
    fn test_headless_logs_to_stderr_unless_file_given() {
        let mut config = DashboardConfig::default();
        assert_eq!(log_target(&config, true), LogTarget::Stderr);

        config.log_file = Some(PathBuf::from("run.log"));
        assert_eq!(log_target(&config, true), LogTarget::File(PathBuf::from("run.log")));
    }
}
