//! Application state wiring the infrastructure pieces together.
//!
//! Core logic is generic over the responder/profile trait seams; AppState
//! pins them to the concrete infra implementations for the running binary.

use std::path::PathBuf;

use jyotibot_infra::config::load_config;
use jyotibot_infra::filesystem::resolve_data_dir;
use jyotibot_infra::geocode::NominatimClient;
use jyotibot_infra::inference::HttpChatResponder;
use jyotibot_infra::profile_store::FileProfileStore;
use jyotibot_types::config::GlobalConfig;

/// Shared application state for all CLI commands.
pub struct AppState {
    pub config: GlobalConfig,
    pub profile_store: FileProfileStore,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Resolve the data dir, load config, and wire the stores.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_config(&data_dir).await?;
        let profile_store = FileProfileStore::new(&data_dir);

        Ok(Self {
            config,
            profile_store,
            data_dir,
        })
    }

    /// Responder for the configured inference endpoint.
    pub fn create_responder(&self) -> anyhow::Result<HttpChatResponder> {
        Ok(HttpChatResponder::new(self.config.endpoint_url.clone())?)
    }

    /// Geocoder for the configured address-search endpoint.
    pub fn create_geocoder(&self) -> anyhow::Result<NominatimClient> {
        Ok(NominatimClient::new(self.config.geocoder_url.clone())?)
    }
}
