use std::fs::{create_dir_all, remove_file, rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use super::error::SaveError;
use super::format::{decompress_and_deserialize, serialize_and_compress, ClubSave};
use super::migration::migrate_save;

const SAVE_EXTENSION: &str = "hoopsave";
const DEFAULT_NAME: &str = "club";

/// Save-file metadata for pickers and the CLI `inspect` command.
#[derive(Debug, Clone)]
pub struct SaveInfo {
    pub name: String,
    pub timestamp: u64,
    pub version: u32,
    pub team_count: usize,
    pub game_count: usize,
    pub action_count: usize,
}

/// Manages club save files inside one directory.
///
/// Construct explicitly with the directory to use and pass the manager to
/// whatever needs persistence; there is no process-global current save.
pub struct SaveManager {
    dir: PathBuf,
}

impl SaveManager {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save under the default name.
    pub fn save(&self, save: &ClubSave) -> Result<(), SaveError> {
        self.save_named(DEFAULT_NAME, save)
    }

    /// Load the default save.
    pub fn load(&self) -> Result<ClubSave, SaveError> {
        self.load_named(DEFAULT_NAME)
    }

    /// Save under an explicit name.
    pub fn save_named(&self, name: &str, save: &ClubSave) -> Result<(), SaveError> {
        Self::validate_name(name)?;
        let path = self.path_for(name);
        self.save_to_path(&path, save)?;
        log::info!("Club saved as '{}'", name);
        Ok(())
    }

    /// Load a named save, migrating old versions if needed.
    pub fn load_named(&self, name: &str) -> Result<ClubSave, SaveError> {
        Self::validate_name(name)?;
        let path = self.path_for(name);
        let save = self.load_from_path(&path)?;
        log::info!("Club loaded from '{}'", name);
        Ok(save)
    }

    pub fn exists(&self, name: &str) -> bool {
        if Self::validate_name(name).is_err() {
            return false;
        }
        self.path_for(name).exists()
    }

    pub fn delete(&self, name: &str) -> Result<(), SaveError> {
        Self::validate_name(name)?;
        let path = self.path_for(name);
        if path.exists() {
            remove_file(&path)?;
            log::info!("Deleted save '{}'", name);
        }
        Ok(())
    }

    /// Metadata of a named save, `None` when the file does not exist.
    pub fn info(&self, name: &str) -> Result<Option<SaveInfo>, SaveError> {
        Self::validate_name(name)?;
        let path = self.path_for(name);
        if !path.exists() {
            return Ok(None);
        }

        let save = self.load_from_path(&path)?;
        Ok(Some(SaveInfo {
            name: name.to_string(),
            timestamp: save.timestamp,
            version: save.version,
            team_count: save.teams.len(),
            game_count: save.games.len(),
            action_count: save.actions.len(),
        }))
    }

    /// List metadata for every save file in the directory.
    pub fn list(&self) -> Result<Vec<SaveInfo>, SaveError> {
        let mut infos = Vec::new();
        if !self.dir.exists() {
            return Ok(infos);
        }
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(SAVE_EXTENSION) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Some(info) = self.info(name)? {
                infos.push(info);
            }
        }
        infos.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(infos)
    }

    /// Write a save to an explicit path, atomically (temp file + rename).
    pub fn save_to_path(&self, path: &Path, save: &ClubSave) -> Result<(), SaveError> {
        let bytes = serialize_and_compress(save)?;

        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("tmp");
        {
            let mut file = File::create(&tmp_path)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
        }
        rename(&tmp_path, path)?;

        Ok(())
    }

    /// Read a save from an explicit path.
    pub fn load_from_path(&self, path: &Path) -> Result<ClubSave, SaveError> {
        if !path.exists() {
            return Err(SaveError::FileNotFound { path: path.display().to_string() });
        }

        let mut bytes = Vec::new();
        File::open(path)?.read_to_end(&mut bytes)?;

        let save = decompress_and_deserialize(&bytes)?;
        migrate_save(save)
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, SAVE_EXTENSION))
    }

    fn validate_name(name: &str) -> Result<(), SaveError> {
        let ok = !name.is_empty()
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if ok {
            Ok(())
        } else {
            Err(SaveError::InvalidName { name: name.to_string() })
        }
    }
}
