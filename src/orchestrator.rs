//! Run flow: city -> weather -> type -> Pokemon -> description
//!
//! The run walks the stages in order and stops at the first failure. Each
//! failure carries the fixed message printed to the user; the underlying
//! error is logged, never surfaced.

use crate::catalog::CatalogClient;
use crate::category::category_for;
use crate::config::PokeWeatherConfig;
use crate::fetcher::JsonFetcher;
use crate::models::NarrativeResult;
use crate::narrative::NarrativeClient;
use crate::weather::WeatherClient;
use rand::RngExt;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

pub const CITY_PROMPT: &str = "❓ Enter your city name: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    AwaitCity,
    FetchWeather,
    MapCategory,
    FetchCatalogEntry,
    GenerateNarrative,
    Done,
}

/// Terminal failure of a run; `Display` is the user-facing message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunFailure {
    #[error("Could not retrieve weather data.")]
    Weather,

    #[error("No category mapping for weather: {0}")]
    NoCategory(String),

    #[error("Could not retrieve Pokemon data.")]
    Catalog,

    #[error("Could not retrieve description.")]
    Narrative,
}

impl RunFailure {
    /// Stage the run was in when it failed
    pub fn stage(&self) -> Stage {
        match self {
            RunFailure::Weather => Stage::FetchWeather,
            RunFailure::NoCategory(_) => Stage::MapCategory,
            RunFailure::Catalog => Stage::FetchCatalogEntry,
            RunFailure::Narrative => Stage::GenerateNarrative,
        }
    }
}

/// Print the prompt and read one line. Any string is accepted, empty included.
pub fn read_city<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    write!(output, "{CITY_PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub struct Orchestrator<'a, F> {
    weather: WeatherClient<&'a F>,
    catalog: CatalogClient<&'a F>,
    narrative: NarrativeClient<&'a F>,
}

impl<'a, F: JsonFetcher> Orchestrator<'a, F> {
    pub fn new(fetcher: &'a F, config: &PokeWeatherConfig) -> Self {
        Self {
            weather: WeatherClient::new(fetcher, &config.weather),
            catalog: CatalogClient::new(fetcher, &config.catalog),
            narrative: NarrativeClient::new(fetcher, &config.generation),
        }
    }

    /// Drive one run for `city`
    #[instrument(skip(self, rng))]
    pub fn run<R: RngExt>(&self, city: &str, rng: &mut R) -> Result<NarrativeResult, RunFailure> {
        debug!(stage = ?Stage::FetchWeather);
        let weather = self.weather.get_weather(city).map_err(|e| {
            warn!(kind = ?e.kind(), "Weather lookup failed: {}", e);
            RunFailure::Weather
        })?;

        debug!(stage = ?Stage::MapCategory);
        let category = category_for(&weather.condition_main).ok_or_else(|| {
            warn!("No category for condition '{}'", weather.condition_main);
            RunFailure::NoCategory(weather.condition_main.clone())
        })?;
        info!("'{}' maps to type '{}'", weather.condition_main, category);

        debug!(stage = ?Stage::FetchCatalogEntry);
        let entry = self.catalog.get_catalog_entry(category, rng).map_err(|e| {
            warn!(kind = ?e.kind(), "Catalog lookup failed: {}", e);
            RunFailure::Catalog
        })?;

        debug!(stage = ?Stage::GenerateNarrative);
        let narrative = self
            .narrative
            .get_narrative(city, &weather, &entry)
            .map_err(|e| {
                warn!(kind = ?e.kind(), "Narrative generation failed: {}", e);
                RunFailure::Narrative
            })?;

        debug!(stage = ?Stage::Done);
        Ok(narrative)
    }

    /// Full interactive run: prompt, run, print the paragraph or failure message
    pub fn run_interactive<I, O, R>(&self, input: &mut I, output: &mut O, rng: &mut R) -> io::Result<()>
    where
        I: BufRead,
        O: Write,
        R: RngExt,
    {
        debug!(stage = ?Stage::AwaitCity);
        let city = read_city(input, output)?;

        match self.run(&city, rng) {
            Ok(narrative) => writeln!(output, "{}", narrative.text),
            Err(failure) => writeln!(output, "{failure}"),
        }
    }
}
