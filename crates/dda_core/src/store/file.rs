//! File-backed provider
//!
//! One save file per player, written atomically via temp file + rename.

use std::fs::{remove_file, rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use super::format::{decompress_and_deserialize, serialize_and_compress, DifficultySave};
use super::{DifficultyStore, StoreError};
use crate::session::SessionData;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the save file, or a fresh save when none exists
    fn read_or_default(&self) -> Result<DifficultySave, StoreError> {
        if !self.path.exists() {
            return Ok(DifficultySave::new());
        }

        let mut file = File::open(&self.path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        let save = decompress_and_deserialize(&data)?;
        log::debug!("Loaded {} bytes from {:?}", data.len(), self.path);
        Ok(save)
    }

    fn write(&self, save: &mut DifficultySave) -> Result<(), StoreError> {
        save.update_timestamp();

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = serialize_and_compress(save)?;

        // Atomic save: write to temp file, then rename
        let temp_path = self.path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&data)?;
            file.flush()?;

            // sync_all ensures data is written to disk (portable fsync)
            file.sync_all()?;
        }

        rename(&temp_path, &self.path)?;

        log::debug!("Saved {} bytes to {:?}", data.len(), self.path);
        Ok(())
    }
}

impl DifficultyStore for FileStore {
    fn load_session(&self) -> Result<SessionData, StoreError> {
        Ok(self.read_or_default()?.session)
    }

    fn save_session(&mut self, session: &SessionData) -> Result<(), StoreError> {
        let mut save = self.read_or_default()?;
        save.session = session.clone();
        self.write(&mut save)
    }

    fn load_difficulty(&self) -> Result<Option<f32>, StoreError> {
        Ok(self.read_or_default()?.difficulty)
    }

    fn save_difficulty(&mut self, value: f32) -> Result<(), StoreError> {
        let mut save = self.read_or_default()?;
        save.difficulty = Some(value);
        self.write(&mut save)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        if self.path.exists() {
            remove_file(&self.path)?;
            log::info!("Cleared save file {:?}", self.path);
        }
        Ok(())
    }
}
