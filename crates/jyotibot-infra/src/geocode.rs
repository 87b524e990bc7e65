//! Nominatim address-search client for the settings form.
//!
//! One GET with `q` and `format=json`; the first result's coordinates win,
//! an empty result array is reported as [`GeocodeError::NotFound`].

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use jyotibot_types::error::GeocodeError;
use jyotibot_types::profile::Coordinates;

/// Client for a Nominatim-compatible search endpoint.
pub struct NominatimClient {
    client: reqwest::Client,
    search_url: String,
}

/// One search hit. Nominatim returns coordinates as strings.
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

impl NominatimClient {
    pub fn new(search_url: String) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            // Nominatim's usage policy requires an identifying agent.
            .user_agent(concat!("jyotibot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeocodeError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, search_url })
    }

    /// Resolve a free-text address to coordinates.
    pub async fn lookup(&self, address: &str) -> Result<Coordinates, GeocodeError> {
        debug!(address, "geocoding address");

        let response = self
            .client
            .get(&self.search_url)
            .query(&[("q", address), ("format", "json")])
            .send()
            .await
            .map_err(|e| GeocodeError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Transport(format!("HTTP {status}")));
        }

        let results: Vec<SearchResult> = response
            .json()
            .await
            .map_err(|e| GeocodeError::Deserialization(e.to_string()))?;

        Self::first_hit(results)
    }

    fn first_hit(results: Vec<SearchResult>) -> Result<Coordinates, GeocodeError> {
        let first = results.into_iter().next().ok_or(GeocodeError::NotFound)?;
        Ok(Coordinates {
            latitude: first.lat,
            longitude: first.lon,
        })
    }
}
