//! Configuration loading.
//!
//! Reads `config.toml` from the data dir. A missing file is the common
//! case and yields defaults; a file that exists but fails to parse is a
//! real error the user should see.

use std::path::Path;

use tracing::debug;

use jyotibot_types::config::GlobalConfig;
use jyotibot_types::error::ProfileError;

/// Load `config.toml` from `data_dir`, falling back to defaults.
pub async fn load_config(data_dir: &Path) -> Result<GlobalConfig, ProfileError> {
    let path = data_dir.join("config.toml");
    match tokio::fs::read_to_string(&path).await {
        Ok(raw) => {
            let config: GlobalConfig = toml::from_str(&raw)
                .map_err(|e| ProfileError::Storage(format!("invalid config.toml: {e}")))?;
            debug!(path = %path.display(), "loaded config");
            Ok(config)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(GlobalConfig::default())
        }
        Err(e) => Err(ProfileError::Storage(format!(
            "failed to read config.toml: {e}"
        ))),
    }
}
