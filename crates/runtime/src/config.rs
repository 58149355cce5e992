//! Storage configuration.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Environment variable overriding the save directory.
pub const SAVE_DATA_DIR_ENV: &str = "SAVE_DATA_DIR";

/// Where characters are saved.
///
/// Passed explicitly to [`crate::FileCharacterRepository`]; there is no
/// process-wide save location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    pub save_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(save_dir: impl Into<PathBuf>) -> Self {
        Self {
            save_dir: save_dir.into(),
        }
    }

    /// Uses `SAVE_DATA_DIR` when set, otherwise [`Self::default_save_dir`].
    pub fn from_env() -> Self {
        match std::env::var_os(SAVE_DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::default(),
        }
    }

    /// `save_games` under the platform data directory, or
    /// `./data/save_games` when no home directory can be determined.
    pub fn default_save_dir() -> PathBuf {
        ProjectDirs::from("", "", "quest-chronicles")
            .map(|dirs| dirs.data_dir().join("save_games"))
            .unwrap_or_else(|| PathBuf::from("./data/save_games"))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(Self::default_save_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dir_ends_in_save_games() {
        let config = StorageConfig::default();
        assert!(config.save_dir.ends_with("save_games"));
    }
}
