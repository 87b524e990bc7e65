//! File-backed profile storage.
//!
//! The profile lives as one JSON record in `profile.json` under the data
//! dir, the fixed-key analogue of the original browser storage slot. Saves
//! replace the whole record; reads that hit a corrupt file degrade to "no
//! profile" with a warning instead of failing the chat turn.

use std::path::{Path, PathBuf};

use tracing::warn;

use jyotibot_core::profile_provider::ProfileProvider;
use jyotibot_types::error::ProfileError;
use jyotibot_types::profile::Profile;

/// JSON-file implementation of [`ProfileProvider`], plus the write side
/// used by the settings form.
#[derive(Debug, Clone)]
pub struct FileProfileStore {
    path: PathBuf,
}

impl FileProfileStore {
    /// Store rooted at `data_dir/profile.json`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("profile.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the stored record wholesale.
    pub async fn save(&self, profile: &Profile) -> Result<(), ProfileError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ProfileError::Storage(format!("create data dir: {e}")))?;
        }
        let json = serde_json::to_string_pretty(profile)
            .map_err(|e| ProfileError::Storage(format!("serialize profile: {e}")))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| ProfileError::Storage(format!("write profile: {e}")))?;
        Ok(())
    }

    /// True if a record exists on disk (it may still fail to parse).
    pub async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }
}

impl ProfileProvider for FileProfileStore {
    async fn load(&self) -> Result<Option<Profile>, ProfileError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ProfileError::Storage(format!("read profile: {e}")));
            }
        };

        match serde_json::from_str(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                // A record we cannot parse must not break the turn.
                warn!(path = %self.path.display(), error = %e, "corrupt profile record, ignoring");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    use jyotibot_types::profile::{Coordinates, Gender};

    fn sample_profile() -> Profile {
        Profile {
            name: "Asha".to_string(),
            dob: "1990-05-02".to_string(),
            time: "14:05:30".to_string(),
            gender: Gender::Female,
            address: "Kolkata, India".to_string(),
            location: Some(Coordinates {
                latitude: "22.5726".to_string(),
                longitude: "88.3639".to_string(),
            }),
        }
    }

    #[tokio::test]
    async fn test_load_without_file_is_none() {
        let dir = tempdir().unwrap();
        let store = FileProfileStore::new(dir.path());
        assert!(store.load().await.unwrap().is_none());
        assert!(!store.exists().await);
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let dir = tempdir().unwrap();
        let store = FileProfileStore::new(dir.path());
        let profile = sample_profile();

        store.save(&profile).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, profile);
    }

    #[tokio::test]
    async fn test_save_replaces_wholesale() {
        let dir = tempdir().unwrap();
        let store = FileProfileStore::new(dir.path());

        store.save(&sample_profile()).await.unwrap();

        let mut replacement = sample_profile();
        replacement.name = "Ravi".to_string();
        replacement.location = None;
        store.save(&replacement).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.name, "Ravi");
        assert!(loaded.location.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_record_degrades_to_none() {
        let dir = tempdir().unwrap();
        let store = FileProfileStore::new(dir.path());
        tokio::fs::write(store.path(), "{not json")
            .await
            .unwrap();

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_creates_missing_data_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("deeper");
        let store = FileProfileStore::new(&nested);
        store.save(&sample_profile()).await.unwrap();
        assert!(store.exists().await);
    }
}
