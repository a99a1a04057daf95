//! Data models for a single run and the external API payloads
//!
//! The records at the top are what the lookups hand to each other. The
//! submodules mirror the wire formats of the three services; conversion into
//! the records is where field presence gets checked.

use serde::{Deserialize, Serialize};

/// Current weather for the requested city
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherReport {
    /// Short condition name, e.g. "Rain"
    #[serde(rename = "main")]
    pub condition_main: String,
    /// Human-readable description of weather conditions
    #[serde(rename = "description")]
    pub condition_description: String,
    /// Location name as resolved by the weather service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Temperature in Celsius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Relative humidity percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<u8>,
    /// Wind speed in m/s
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
}

impl WeatherReport {
    pub fn new<M: Into<String>, D: Into<String>>(main: M, description: D) -> Self {
        Self {
            condition_main: main.into(),
            condition_description: description.into(),
            location: None,
            temperature: None,
            humidity: None,
            wind_speed: None,
        }
    }

    pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
        kelvin - 273.15
    }
}

/// One Pokemon picked from a type listing
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CatalogEntry {
    pub name: String,
    /// PokeAPI resource link for this Pokemon
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// The type it was requested under
    #[serde(rename = "type")]
    pub category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeResult {
    pub text: String,
}

/// OpenWeatherMap `/weather` response structures
pub mod openweather {
    use super::WeatherReport;
    use crate::{PokeWeatherError, Result};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct CurrentWeatherResponse {
        #[serde(default)]
        pub weather: Option<Vec<Condition>>,
        pub main: Option<MainData>,
        pub wind: Option<WindData>,
        pub name: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Condition {
        pub main: String,
        #[serde(default)]
        pub description: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainData {
        /// Kelvin, the service default unit
        pub temp: Option<f64>,
        pub humidity: Option<u8>,
    }

    #[derive(Debug, Deserialize)]
    pub struct WindData {
        pub speed: Option<f64>,
    }

    impl TryFrom<CurrentWeatherResponse> for WeatherReport {
        type Error = PokeWeatherError;

        fn try_from(response: CurrentWeatherResponse) -> Result<Self> {
            let condition = response
                .weather
                .and_then(|conditions| conditions.into_iter().next())
                .ok_or_else(|| PokeWeatherError::missing_data("No weather conditions in response"))?;

            let mut report = WeatherReport::new(condition.main, condition.description);
            report.location = response.name.filter(|name| !name.is_empty());
            if let Some(main) = response.main {
                report.temperature = main.temp.map(WeatherReport::kelvin_to_celsius);
                report.humidity = main.humidity;
            }
            report.wind_speed = response.wind.and_then(|wind| wind.speed);
            Ok(report)
        }
    }
}

/// PokeAPI `/type/{name}` response structures
pub mod pokeapi {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct TypeResponse {
        #[serde(default)]
        pub pokemon: Option<Vec<TypeSlot>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct TypeSlot {
        pub pokemon: NamedResource,
    }

    #[derive(Debug, Deserialize, Clone)]
    pub struct NamedResource {
        pub name: String,
        #[serde(default)]
        pub url: String,
    }
}

/// OpenAI-compatible chat completion structures
pub mod chat {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize)]
    pub struct ChatCompletionRequest {
        pub model: String,
        pub messages: Vec<ChatMessage>,
    }

    #[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
    pub struct ChatMessage {
        #[serde(default)]
        pub role: String,
        pub content: String,
    }

    impl ChatMessage {
        pub fn system<S: Into<String>>(content: S) -> Self {
            Self {
                role: "system".into(),
                content: content.into(),
            }
        }

        pub fn user<S: Into<String>>(content: S) -> Self {
            Self {
                role: "user".into(),
                content: content.into(),
            }
        }
    }

    #[derive(Debug, Deserialize)]
    pub struct ChatCompletionResponse {
        #[serde(default)]
        pub choices: Option<Vec<Choice>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Choice {
        pub message: ChatMessage,
    }
}

#[cfg(test)]
mod tests {
    use super::openweather::CurrentWeatherResponse;
    use super::*;
    use crate::ErrorKind;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> CurrentWeatherResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_weather_report_from_full_response() {
        let response = parse(json!({
            "weather": [{"main": "Rain", "description": "light rain"}],
            "main": {"temp": 300.15, "humidity": 81},
            "wind": {"speed": 4.1},
            "name": "Nashik"
        }));

        let report = WeatherReport::try_from(response).unwrap();
        assert_eq!(report.condition_main, "Rain");
        assert_eq!(report.condition_description, "light rain");
        assert_eq!(report.location.as_deref(), Some("Nashik"));
        assert!((report.temperature.unwrap() - 27.0).abs() < 1e-9);
        assert_eq!(report.humidity, Some(81));
        assert_eq!(report.wind_speed, Some(4.1));
    }

    #[test]
    fn test_weather_report_uses_first_condition() {
        let response = parse(json!({
            "weather": [
                {"main": "Mist", "description": "mist"},
                {"main": "Rain", "description": "rain"}
            ]
        }));
        let report = WeatherReport::try_from(response).unwrap();
        assert_eq!(report.condition_main, "Mist");
        assert_eq!(report.temperature, None);
    }

    #[test]
    fn test_weather_report_missing_conditions() {
        for value in [json!({}), json!({"weather": []}), json!({"weather": null})] {
            let err = WeatherReport::try_from(parse(value)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingData);
        }
    }

    #[test]
    fn test_weather_report_serializes_wire_names() {
        let report = WeatherReport::new("Clear", "clear sky");
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({"main": "Clear", "description": "clear sky"})
        );
    }

    #[test]
    fn test_catalog_entry_serialization() {
        let entry = CatalogEntry {
            name: "charmander".to_string(),
            url: String::new(),
            category: "Fire".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"name": "charmander", "type": "Fire"})
        );
    }
}
