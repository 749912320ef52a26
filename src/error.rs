// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Backing file missing or unreadable.
    #[error("cannot read cards at {0:?}: {1}")]
    Read(PathBuf, io::Error),
    /// Backing file is not a JSON object of cards.
    #[error("cannot parse cards at {0:?}: {1}")]
    Parse(PathBuf, serde_json::Error),
    /// Backing file could not be written or replaced.
    #[error("cannot write cards at {0:?}: {1}")]
    Write(PathBuf, io::Error),
    #[error("cannot encode cards: {0}")]
    Encode(serde_json::Error),
}

impl StoreError {
    /// True for failures raised while loading, false for failures raised while saving.
    pub fn is_read(&self) -> bool {
        matches!(self, StoreError::Read(..) | StoreError::Parse(..))
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
pub type Result<T> = StoreResult<T>;
