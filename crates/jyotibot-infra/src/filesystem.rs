//! Data directory resolution.

use std::path::PathBuf;

/// Resolve the directory holding `profile.json` and `config.toml`.
///
/// Order: `JYOTIBOT_DATA_DIR` env override, then `~/.jyotibot`, then a
/// `.jyotibot` directory next to the working directory as a last resort.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("JYOTIBOT_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".jyotibot");
    }

    PathBuf::from(".jyotibot")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_data_dir_from_env() {
        // SAFETY: This test is single-threaded and restores the env var immediately.
        unsafe {
            std::env::set_var("JYOTIBOT_DATA_DIR", "/tmp/test-jyotibot");
        }
        let dir = resolve_data_dir();
        assert_eq!(dir, PathBuf::from("/tmp/test-jyotibot"));
        unsafe {
            std::env::remove_var("JYOTIBOT_DATA_DIR");
        }
    }
}
