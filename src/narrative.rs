//! Short generated paragraph tying city, weather and Pokemon together

use crate::config::GenerationServiceConfig;
use crate::fetcher::JsonFetcher;
use crate::models::chat::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::models::{CatalogEntry, NarrativeResult, WeatherReport};
use crate::{PokeWeatherError, Result};
use tracing::{debug, info, instrument};

pub const SYSTEM_PROMPT: &str = "
Write a short and fun paragraph on why the given pokemon would be the best choice to take to the given city with the given weather conditions.
Keep it short and crisp.

Format should be:
City: <name_of_city>
Weather: <description_of_weather>
Pokemon: <name_of_pokemon> (<type_of_pokemon>)

<your_paragraph>";

pub struct NarrativeClient<F> {
    fetcher: F,
    api_key: String,
    base_url: String,
    model: String,
}

impl<F: JsonFetcher> NarrativeClient<F> {
    pub fn new(fetcher: F, config: &GenerationServiceConfig) -> Self {
        Self {
            fetcher,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    pub fn build_request(
        &self,
        city: &str,
        weather: &WeatherReport,
        entry: &CatalogEntry,
    ) -> Result<ChatCompletionRequest> {
        let weather_json = serde_json::to_string(weather)?;
        let entry_json = serde_json::to_string(entry)?;

        Ok(ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(format!(
                    "city:{city},weather:{weather_json},pokemon={entry_json}"
                )),
            ],
        })
    }

    /// Ask the generation service for the paragraph
    #[instrument(skip(self, weather, entry), fields(pokemon = %entry.name))]
    pub fn get_narrative(
        &self,
        city: &str,
        weather: &WeatherReport,
        entry: &CatalogEntry,
    ) -> Result<NarrativeResult> {
        info!("Generating description with model '{}'", self.model);

        let body = serde_json::to_value(self.build_request(city, weather, entry)?)?;
        let authorization = format!("Bearer {}", self.api_key);
        let headers = [("Authorization", authorization.as_str())];

        let value = self
            .fetcher
            .fetch(&self.completions_url(), &headers, Some(&body))?;
        let response: ChatCompletionResponse = serde_json::from_value(value).map_err(|e| {
            PokeWeatherError::missing_data(format!("Unexpected completion response shape: {e}"))
        })?;

        let choice = response
            .choices
            .and_then(|choices| choices.into_iter().next())
            .ok_or_else(|| PokeWeatherError::missing_data("No choices in completion response"))?;

        debug!("Received {} characters", choice.message.content.len());
        Ok(NarrativeResult {
            text: choice.message.content,
        })
    }
}
