use clap::Parser;
use color_eyre::eyre::eyre;
use color_eyre::Result;

use covid_dashboard::app::App;
use covid_dashboard::cli::CliArgs;
use covid_dashboard::config::init_app_config;
use covid_dashboard::data::DataLoader;
use covid_dashboard::logging::init_logging;
use covid_dashboard::{event, terminal, ui};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config()?;

    // Not a terminal means headless, whatever the flags say
    let headless = args.headless || args.json || !is_terminal();
    init_logging(&config, headless)?;

    let loader = DataLoader::from_source(&config.api_url, config.cache_ttl)
        .map_err(|e| eyre!("Invalid data source: {e}"))?;
    tracing::info!(
        source = loader.source(),
        ttl_secs = config.cache_ttl.as_secs(),
        "starting dashboard"
    );

    let mut app = App::new(loader, config.default_countries.clone());

    if headless {
        return event::run_headless(&mut app, args.json).await;
    }

    let mut terminal = terminal::setup_terminal()?;

    // First load happens with the loading frame on screen
    if let Err(e) = terminal.draw(|f| ui::loading(&app, f)) {
        tracing::warn!(error = %e, "failed to draw loading frame");
    }
    app.reload().await;

    let result = event::run(&mut terminal, &mut app).await;

    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
