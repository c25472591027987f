use color_eyre::eyre::{eyre, WrapErr};
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.covid19api.com/summary";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 600;
pub const DEFAULT_COUNTRIES: [&str; 3] = ["United States", "India", "Brazil"];

/// Runtime settings, resolved from `.env`, the environment and CLI overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub api_url: String,
    pub cache_ttl: Duration,
    pub default_countries: Vec<String>,
    pub log_file: Option<PathBuf>,
    pub debug: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            default_countries: DEFAULT_COUNTRIES.iter().map(ToString::to_string).collect(),
            log_file: None,
            debug: false,
        }
    }
}

/// Initializes the application configuration
pub fn init_app_config() -> color_eyre::eyre::Result<DashboardConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    config_from_lookup(|key| env::var(key).ok())
}

/// Builds the config from any key lookup; `init_app_config` passes the process environment
pub fn config_from_lookup<F>(lookup: F) -> color_eyre::eyre::Result<DashboardConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = DashboardConfig::default();

    let api_url = lookup("COVID_API_URL")
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or(defaults.api_url);

    let cache_ttl = match lookup("COVID_CACHE_TTL_SECS") {
        Some(raw) => Duration::from_secs(
            raw.trim()
                .parse::<u64>()
                .wrap_err_with(|| format!("COVID_CACHE_TTL_SECS must be a number of seconds, got {raw:?}"))?,
        ),
        None => defaults.cache_ttl,
    };

    let default_countries = lookup("COVID_DEFAULT_COUNTRIES")
        .map_or(defaults.default_countries, |raw| parse_country_list(&raw));

    let log_file = lookup("COVID_LOG_FILE")
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from);

    let debug = lookup("DEBUG").is_some_and(|value| !value.is_empty() && value != "0");

    if !api_url.starts_with("http://")
        && !api_url.starts_with("https://")
        && !api_url.starts_with("file://")
    {
        return Err(eyre!(
            "COVID_API_URL must start with http://, https:// or file://, got {api_url}"
        ));
    }

    Ok(DashboardConfig {
        api_url,
        cache_ttl,
        default_countries,
        log_file,
        debug,
    })
}

/// Splits a comma separated list, dropping blanks
pub fn parse_country_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() -> color_eyre::eyre::Result<()> {
        let config = config_from_lookup(lookup_from(&[]))?;
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.cache_ttl, Duration::from_secs(600));
        assert_eq!(config.default_countries, vec!["United States", "India", "Brazil"]);
        Ok(())
    }

    #[test]
    fn test_overrides_are_read() -> color_eyre::eyre::Result<()> {
        let config = config_from_lookup(lookup_from(&[
            ("COVID_API_URL", "file:///tmp/summary.json"),
            ("COVID_CACHE_TTL_SECS", " 30 "),
            ("COVID_DEFAULT_COUNTRIES", "Chile, ,Peru"),
            ("COVID_LOG_FILE", "dash.log"),
            ("DEBUG", "1"),
        ]))?;

        assert_eq!(config.api_url, "file:///tmp/summary.json");
        assert_eq!(config.cache_ttl, Duration::from_secs(30));
        assert_eq!(config.default_countries, vec!["Chile", "Peru"]);
        assert_eq!(config.log_file, Some(PathBuf::from("dash.log")));
        assert!(config.debug);
        Ok(())
    }

    #[test]
    fn test_bad_ttl_is_an_error() {
        let result = config_from_lookup(lookup_from(&[("COVID_CACHE_TTL_SECS", "ten minutes")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_scheme_is_an_error() {
        let result = config_from_lookup(lookup_from(&[("COVID_API_URL", "ftp://example.com")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_zero_is_off() -> color_eyre::eyre::Result<()> {
        let config = config_from_lookup(lookup_from(&[("DEBUG", "0")]))?;
        assert!(!config.debug);
        Ok(())
    }
}
