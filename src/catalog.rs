//! Random Pokemon of a given type from PokeAPI

use crate::config::CatalogServiceConfig;
use crate::fetcher::JsonFetcher;
use crate::models::{CatalogEntry, pokeapi::TypeResponse};
use crate::{PokeWeatherError, Result};
use rand::RngExt;
use tracing::{debug, info, instrument};

pub struct CatalogClient<F> {
    fetcher: F,
    base_url: String,
}

impl<F: JsonFetcher> CatalogClient<F> {
    pub fn new(fetcher: F, config: &CatalogServiceConfig) -> Self {
        Self {
            fetcher,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// PokeAPI type names are lowercase
    pub fn type_url(&self, category: &str) -> String {
        format!(
            "{}/type/{}",
            self.base_url,
            urlencoding::encode(&category.to_lowercase())
        )
    }

    /// Fetch the listing for `category` and pick one entry uniformly at random
    #[instrument(skip(self, rng))]
    pub fn get_catalog_entry<R: RngExt>(
        &self,
        category: &str,
        rng: &mut R,
    ) -> Result<CatalogEntry> {
        info!("Getting a random Pokemon of type '{}'", category);

        let value = self.fetcher.fetch(&self.type_url(category), &[], None)?;
        let response: TypeResponse = serde_json::from_value(value).map_err(|e| {
            PokeWeatherError::missing_data(format!("Unexpected type listing shape: {e}"))
        })?;

        let mut listing = response.pokemon.unwrap_or_default();
        if listing.is_empty() {
            return Err(PokeWeatherError::missing_data(format!(
                "No Pokemon listed for type '{category}'"
            )));
        }

        let index = rng.random_range(0..listing.len());
        let picked = listing.swap_remove(index).pokemon;
        debug!(
            "Picked '{}' (index {} of {})",
            picked.name,
            index,
            listing.len() + 1
        );

        Ok(CatalogEntry {
            name: picked.name,
            url: picked.url,
            category: category.to_string(),
        })
    }
}
