//! Generic JSON-over-HTTP fetching shared by every lookup
//!
//! A body turns the call into a POST with that body as JSON, otherwise a GET
//! is issued. Exactly one request per call, no retries.

use crate::config::HttpConfig;
use crate::{PokeWeatherError, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

/// Capability used by the weather, catalog and narrative lookups
pub trait JsonFetcher {
    fn fetch(&self, url: &str, headers: &[(&str, &str)], body: Option<&Value>) -> Result<Value>;
}

impl<T: JsonFetcher + ?Sized> JsonFetcher for &T {
    fn fetch(&self, url: &str, headers: &[(&str, &str)], body: Option<&Value>) -> Result<Value> {
        (**self).fetch(url, headers, body)
    }
}

/// [`JsonFetcher`] backed by a blocking reqwest client
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| PokeWeatherError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl JsonFetcher for HttpFetcher {
    #[instrument(skip_all, fields(url = %redact_url(url), post = body.is_some()))]
    fn fetch(&self, url: &str, headers: &[(&str, &str)], body: Option<&Value>) -> Result<Value> {
        let start = Instant::now();

        let request = match body {
            Some(body) => self.client.post(url).json(body),
            None => self.client.get(url),
        };
        // one value per header name; overrides the Content-Type set by json()
        let request = request.headers(header_map(headers)?);

        let response = request.send().map_err(|e| {
            warn!("API request failed: {}", e);
            PokeWeatherError::request(format!("API request failed: {e}"))
        })?;

        let status = response.status();
        debug!(
            "HTTP response received: {} in {:.3}s",
            status,
            start.elapsed().as_secs_f64()
        );

        if !status.is_success() {
            warn!("API request failed with status {}", status);
            return Err(PokeWeatherError::request(format!(
                "API request failed with status: {} - {}",
                status,
                status.canonical_reason().unwrap_or("Unknown error")
            )));
        }

        let text = response.text().map_err(|e| {
            warn!("Failed to read response body: {}", e);
            PokeWeatherError::request(format!("Failed to read response body: {e}"))
        })?;

        serde_json::from_str(&text).map_err(|e| {
            warn!("Invalid JSON response received: {}", e);
            PokeWeatherError::decode(format!("Invalid JSON response received: {e}"))
        })
    }
}

fn header_map(headers: &[(&str, &str)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| PokeWeatherError::request(format!("Invalid header name '{name}': {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| PokeWeatherError::request(format!("Invalid value for header '{name}': {e}")))?;
        map.insert(name, value);
    }
    Ok(map)
}

/// Strip secret query values so URLs can be logged
pub fn redact_url(url: &str) -> String {
    match url.split_once('?') {
        Some((path, query)) => {
            let query = query
                .split('&')
                .map(|pair| match pair.split_once('=') {
                    Some(("appid", _)) => "appid=***".to_string(),
                    _ => pair.to_string(),
                })
                .collect::<Vec<_>>()
                .join("&");
            format!("{path}?{query}")
        }
        None => url.to_string(),
    }
}
