//! File-based CharacterRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use chronicle_core::{Character, check_character, validate_name};

use crate::config::StorageConfig;
use crate::repository::codec;
use crate::repository::{CharacterRepository, RepositoryError, Result};

const SAVE_SUFFIX: &str = "_save.txt";

/// File-based implementation of CharacterRepository.
///
/// Each character is stored as `{name}_save.txt` in the text format of
/// [`codec`]. The directory is created on the first save, so a repository
/// pointed at a missing directory simply lists no characters.
pub struct FileCharacterRepository {
    base_dir: PathBuf,
}

impl FileCharacterRepository {
    /// Create a repository rooted at `base_dir`. Nothing is touched on disk.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.save_dir)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the save file for `name`.
    ///
    /// Only meaningful for names accepted by [`validate_name`].
    pub fn save_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("{name}{SAVE_SUFFIX}"))
    }

    /// Resolves `name` to an existing save file.
    fn existing_path(&self, name: &str) -> Result<PathBuf> {
        if validate_name(name).is_err() {
            return Err(RepositoryError::not_found(name));
        }
        let path = self.save_path(name);
        if !path.is_file() {
            return Err(RepositoryError::not_found(name));
        }
        Ok(path)
    }
}

impl CharacterRepository for FileCharacterRepository {
    fn save(&self, character: &Character) -> Result<()> {
        let name = character.name();
        check_character(character).map_err(|e| RepositoryError::invalid(name, e))?;

        let path = self.save_path(name);
        let temp_path = path.with_extension("txt.tmp");
        let corrupted = |source| RepositoryError::SaveCorrupted {
            name: name.to_string(),
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.base_dir).map_err(corrupted)?;
        fs::write(&temp_path, codec::encode(character)).map_err(corrupted)?;
        fs::rename(&temp_path, &path).map_err(corrupted)?;

        tracing::debug!("Saved character {:?} to {}", name, path.display());

        Ok(())
    }

    fn load(&self, name: &str) -> Result<Character> {
        let path = self.existing_path(name)?;

        let text = fs::read_to_string(&path).map_err(|source| RepositoryError::SaveCorrupted {
            name: name.to_string(),
            path: path.clone(),
            source,
        })?;

        let character = codec::decode_named(name, &text).map_err(|e| {
            tracing::warn!("Rejected save {}: {}", path.display(), e);
            RepositoryError::invalid(name, e)
        })?;

        tracing::debug!("Loaded character {:?} from {}", name, path.display());

        Ok(character)
    }

    fn exists(&self, name: &str) -> bool {
        self.existing_path(name).is_ok()
    }

    fn delete(&self, name: &str) -> Result<()> {
        let path = self.existing_path(name)?;
        fs::remove_file(&path)?;

        tracing::debug!("Deleted character {:?}", name);

        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.base_dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(name) = filename.strip_suffix(SAVE_SUFFIX)
                && validate_name(name).is_ok()
            {
                names.push(name.to_string());
            }
        }

        names.sort_unstable();
        Ok(names)
    }
}
