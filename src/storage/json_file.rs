//! File-backed persistence adapter

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{seed, ProfileStore, StorageError};
use crate::domain::profiles::Profile;

/// Stores the collection as one JSON array in a single file, standing in for
/// one key in a real key-value backend.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Profile>, StorageError> {
        if self.path.exists() {
            let raw = fs::read_to_string(&self.path)?;
            let profiles: Vec<Profile> = serde_json::from_str(&raw)?;
            debug!(
                path = %self.path.display(),
                count = profiles.len(),
                "Loaded persisted profiles"
            );
            return Ok(profiles);
        }

        let seeded = seed::default_profiles()?;
        self.save(&seeded)?;
        info!(
            path = %self.path.display(),
            count = seeded.len(),
            "Seeded profile store from bundled dataset"
        );
        Ok(seeded)
    }

    fn save(&self, profiles: &[Profile]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(profiles)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
