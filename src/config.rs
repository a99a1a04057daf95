//! Configuration management for `PokeWeather`
//!
//! The two service keys come from the process environment (optionally
//! seeded from a `.env` file). Everything else is fixed.

use crate::{PokeWeatherError, Result};
use std::collections::HashMap;
use std::env;
use std::path::Path;

pub const WEATHER_KEY_VAR: &str = "OPEN_WEATHER_KEY";
pub const GENERATION_KEY_VAR: &str = "GROQ_KEY";

/// Root configuration structure
#[derive(Debug, Clone)]
pub struct PokeWeatherConfig {
    pub weather: WeatherServiceConfig,
    pub catalog: CatalogServiceConfig,
    pub generation: GenerationServiceConfig,
    pub http: HttpConfig,
}

/// OpenWeatherMap settings
#[derive(Debug, Clone)]
pub struct WeatherServiceConfig {
    pub api_key: String,
    pub base_url: String,
}

/// PokeAPI settings
#[derive(Debug, Clone)]
pub struct CatalogServiceConfig {
    pub base_url: String,
}

/// Chat completion service settings
#[derive(Debug, Clone)]
pub struct GenerationServiceConfig {
    pub api_key: String,
    pub base_url: String,
    /// Model identifier sent with every completion request
    pub model: String,
}

/// Shared HTTP client settings
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_catalog_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_generation_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("pokeweather/{}", crate::VERSION)
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let read_error =
        |e: dotenvy::Error| PokeWeatherError::config(format!("Failed to read {}: {e}", path.display()));

    match dotenvy::from_path_iter(path) {
        Ok(iter) => {
            let vars = iter.collect::<std::result::Result<HashMap<_, _>, _>>().map_err(read_error)?;
            tracing::debug!("Loaded {} variables from {}", vars.len(), path.display());
            Ok(vars)
        }
        Err(e) if e.not_found() => Ok(HashMap::new()),
        Err(e) => Err(read_error(e)),
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl PokeWeatherConfig {
    /// Build a configuration around the given keys using the public service URLs
    pub fn with_keys<W: Into<String>, G: Into<String>>(weather_key: W, generation_key: G) -> Self {
        Self {
            weather: WeatherServiceConfig {
                api_key: weather_key.into(),
                base_url: default_weather_base_url(),
            },
            catalog: CatalogServiceConfig {
                base_url: default_catalog_base_url(),
            },
            generation: GenerationServiceConfig {
                api_key: generation_key.into(),
                base_url: default_generation_base_url(),
                model: default_model(),
            },
            http: HttpConfig::default(),
        }
    }

    /// Load `.env` if present, then read the keys from the environment
    pub fn load() -> Result<Self> {
        Self::load_with_env_file(Path::new(".env"), |name| env::var(name).ok())
    }

    /// Resolve the keys from `lookup`, falling back to the values in `env_file`.
    /// A missing file is not an error.
    pub fn load_with_env_file<F>(env_file: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file_vars = read_env_file(env_file)?;
        Self::from_lookup(|name| lookup(name).or_else(|| file_vars.get(name).cloned()))
    }

    /// Build a configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name)
                .ok_or_else(|| PokeWeatherError::config(format!("Missing {name} env var")))
        };

        let config = Self::with_keys(require(WEATHER_KEY_VAR)?, require(GENERATION_KEY_VAR)?);
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.weather.api_key.trim().is_empty() {
            return Err(PokeWeatherError::config(format!(
                "{WEATHER_KEY_VAR} cannot be empty"
            )));
        }
        if self.generation.api_key.trim().is_empty() {
            return Err(PokeWeatherError::config(format!(
                "{GENERATION_KEY_VAR} cannot be empty"
            )));
        }

        for (service, url) in [
            ("Weather", &self.weather.base_url),
            ("Catalog", &self.catalog.base_url),
            ("Generation", &self.generation.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(PokeWeatherError::config(format!(
                    "{service} base URL must be a valid HTTP or HTTPS URL"
                )));
            }
        }

        if self.http.timeout_seconds == 0 || self.http.timeout_seconds > 300 {
            return Err(PokeWeatherError::config(
                "HTTP timeout must be between 1 and 300 seconds",
            ));
        }

        Ok(())
    }
}
