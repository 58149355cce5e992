//! Save and content directory resolution.
//!
//! Order for the save directory: `--save-dir`, then `SAVE_DATA_DIR` (from the
//! environment or `.env`), then the platform data directory:
//! - macOS: `~/Library/Application Support/quest-chronicles/save_games`
//! - Linux: `~/.local/share/quest-chronicles/save_games`
//! - Windows: `%APPDATA%\quest-chronicles\data\save_games`
//! - Fallback: `./data/save_games`

use std::path::PathBuf;

use chronicle_content::ContentFactory;
use chronicle_runtime::{FileCharacterRepository, StorageConfig};

pub fn save_dir(override_dir: Option<PathBuf>) -> PathBuf {
    match override_dir {
        Some(dir) => dir,
        None => StorageConfig::from_env().save_dir,
    }
}

pub fn repository(override_dir: Option<PathBuf>) -> FileCharacterRepository {
    FileCharacterRepository::new(save_dir(override_dir))
}

/// Item catalog location: `CONTENT_DATA_DIR` or the bundled `data/`.
pub fn content() -> ContentFactory {
    ContentFactory::default_paths()
}
