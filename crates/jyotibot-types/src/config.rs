//! Global configuration for Jyotibot.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls the
//! inference endpoint, session id, and geocoder URL. All fields have
//! defaults matching the deployed service, so a missing or empty file works.

use serde::{Deserialize, Serialize};

/// Top-level configuration, loaded from `config.toml` in the data dir.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Inference endpoint the chat loop POSTs each turn to.
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,

    /// Session identifier sent with every request.
    #[serde(default = "default_session_id")]
    pub session_id: String,

    /// Address-search endpoint used by the settings form.
    #[serde(default = "default_geocoder_url")]
    pub geocoder_url: String,
}

fn default_endpoint_url() -> String {
    "https://swt6p22kkie7j6vculzufs3brm0vynks.lambda-url.us-east-1.on.aws/".to_string()
}

fn default_session_id() -> String {
    "user1".to_string()
}

fn default_geocoder_url() -> String {
    "https://nominatim.openstreetmap.org/search".to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            session_id: default_session_id(),
            geocoder_url: default_geocoder_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = GlobalConfig::default();
        assert!(config.endpoint_url.starts_with("https://"));
        assert_eq!(config.session_id, "user1");
        assert!(config.geocoder_url.contains("nominatim"));
    }

    #[test]
    fn test_deserialize_empty_toml_uses_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.session_id, "user1");
    }

    #[test]
    fn test_deserialize_with_overrides() {
        let toml_str = r#"
endpoint_url = "http://localhost:9000/"
session_id = "dev"
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.endpoint_url, "http://localhost:9000/");
        assert_eq!(config.session_id, "dev");
        // Unset fields still default.
        assert!(config.geocoder_url.contains("nominatim"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = GlobalConfig {
            endpoint_url: "http://localhost:9000/".to_string(),
            session_id: "dev".to_string(),
            geocoder_url: "http://localhost:9001/search".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GlobalConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.endpoint_url, "http://localhost:9000/");
        assert_eq!(parsed.session_id, "dev");
    }
}
