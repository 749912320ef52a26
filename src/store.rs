// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::collection::CardCollection;
use crate::config::{DEFAULT_STORE_FILE, EMPTY_STORE};
use crate::error::{Result, StoreError};

/// The JSON file holding the whole card collection.
///
/// Holds no cards itself: every `load_all` re-reads the file and every
/// `save_all` rewrites it completely.
#[derive(Debug, Clone)]
pub struct CardStore {
    path: PathBuf,
}

impl Default for CardStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

impl CardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_all(&self) -> Result<CardCollection> {
        let data = fs::read(&self.path).map_err(|e| StoreError::Read(self.path.clone(), e))?;
        serde_json::from_slice(&data).map_err(|e| StoreError::Parse(self.path.clone(), e))
    }

    /// Pretty-prints the collection into `<path>.tmp`, then renames it over
    /// the store file. A failed write leaves the previous file in place.
    pub fn save_all(&self, cards: &CardCollection) -> Result<()> {
        let json = serde_json::to_vec_pretty(cards).map_err(StoreError::Encode)?;
        self.write_replace(&json)
    }

    /// Creates the store file holding an empty collection.
    /// Returns `false` without touching anything if the file already exists.
    pub fn init_if_missing(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::Write(self.path.clone(), e))?;
        }
        self.write_replace(EMPTY_STORE.as_bytes())?;
        Ok(true)
    }

    /// On failure the temp file is removed; the store file is never half-written.
    fn write_replace(&self, bytes: &[u8]) -> Result<()> {
        let tmp_path = self.tmp_path();

        let written = Self::write_tmp(&tmp_path, bytes)
            .and_then(|_| fs::rename(&tmp_path, &self.path));
        if let Err(e) = written {
            // Leave a pre-existing directory at the temp path alone.
            if tmp_path.is_file() {
                let _ = fs::remove_file(&tmp_path);
            }
            return Err(StoreError::Write(self.path.clone(), e));
        }
        Ok(())
    }

    fn write_tmp(tmp_path: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut file = fs::File::create(tmp_path)?;
        file.write_all(bytes)?;
        file.sync_all()
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
