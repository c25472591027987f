use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "covid_dashboard", version, about = "COVID-19 Global Data Dashboard")]
pub struct CliArgs {
    /// Print the dashboard once and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the summary endpoint (http(s):// or file://)
    #[arg(long, value_name = "URL")]
    pub source: Option<String>,

    /// Override the cache time-to-live in seconds
    #[arg(long, value_name = "SECS")]
    pub ttl: Option<u64>,

    /// Country to preselect; repeat for several
    #[arg(long = "country", value_name = "NAME")]
    pub countries: Vec<String>,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(source) = &self.source {
            std::env::set_var("COVID_API_URL", source);
        }
        if let Some(ttl) = self.ttl {
            std::env::set_var("COVID_CACHE_TTL_SECS", ttl.to_string());
        }
        if !self.countries.is_empty() {
            std::env::set_var("COVID_DEFAULT_COUNTRIES", self.countries.join(","));
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("COVID_LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() -> Result<(), clap::Error> {
        let args = CliArgs::try_parse_from([
            "covid_dashboard",
            "--headless",
            "--json",
            "--ttl",
            "60",
            "--country",
            "India",
            "--country",
            "Brazil",
            "--source",
            "file://summary.json",
        ])?;

        assert!(args.headless);
        assert!(args.json);
        assert_eq!(args.ttl, Some(60));
        assert_eq!(args.countries, vec!["India", "Brazil"]);
        assert_eq!(args.source.as_deref(), Some("file://summary.json"));
        Ok(())
    }

    #[test]
    fn test_help_mentions_flags() {
        let help = CliArgs::help_text();
        assert!(help.contains("--headless"));
        assert!(help.contains("--country"));
    }
}
