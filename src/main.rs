use anyhow::{Context, Result};
use pokeweather::{HttpFetcher, Orchestrator, PokeWeatherConfig};
use std::io;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let config = PokeWeatherConfig::load().context("Failed to load configuration")?;
    let fetcher = HttpFetcher::new(&config.http).context("Failed to set up HTTP client")?;
    let orchestrator = Orchestrator::new(&fetcher, &config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    orchestrator
        .run_interactive(&mut stdin.lock(), &mut stdout.lock(), &mut rand::rng())
        .context("Failed to talk to the terminal")?;

    Ok(())
}
