//! `PokeWeather` - pick a Pokemon for the weather in your city
//!
//! Looks up the current weather for a city, maps the condition to a Pokemon
//! type, picks a random Pokemon of that type and asks a chat model for a
//! short paragraph about the pairing.

pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod narrative;
pub mod orchestrator;
pub mod weather;

#[cfg(test)]
mod test_support;

// Re-export core types for public API
pub use catalog::CatalogClient;
pub use category::{CATEGORY_MAP, category_for};
pub use config::PokeWeatherConfig;
pub use error::{ErrorKind, PokeWeatherError};
pub use fetcher::{HttpFetcher, JsonFetcher};
pub use models::{CatalogEntry, NarrativeResult, WeatherReport};
pub use narrative::NarrativeClient;
pub use orchestrator::{Orchestrator, RunFailure, Stage};
pub use weather::WeatherClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, PokeWeatherError>;
