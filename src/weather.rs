//! Current weather lookup against OpenWeatherMap

use crate::config::WeatherServiceConfig;
use crate::fetcher::JsonFetcher;
use crate::models::{WeatherReport, openweather::CurrentWeatherResponse};
use crate::{PokeWeatherError, Result};
use tracing::{debug, info, instrument};

pub struct WeatherClient<F> {
    fetcher: F,
    api_key: String,
    base_url: String,
}

impl<F: JsonFetcher> WeatherClient<F> {
    pub fn new(fetcher: F, config: &WeatherServiceConfig) -> Self {
        Self {
            fetcher,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn weather_url(&self, city: &str) -> String {
        format!(
            "{}/weather?appid={}&q={}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(city)
        )
    }

    /// Fetch the current weather for `city`
    #[instrument(skip(self))]
    pub fn get_weather(&self, city: &str) -> Result<WeatherReport> {
        info!("Getting current weather for '{}'", city);

        let value = self.fetcher.fetch(&self.weather_url(city), &[], None)?;
        let response: CurrentWeatherResponse = serde_json::from_value(value).map_err(|e| {
            PokeWeatherError::missing_data(format!("Unexpected weather response shape: {e}"))
        })?;
        let report = WeatherReport::try_from(response)?;

        debug!(
            "Weather for '{}': {} ({})",
            city, report.condition_main, report.condition_description
        );
        Ok(report)
    }
}
