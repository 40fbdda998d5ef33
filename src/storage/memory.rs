//! In-memory persistence adapter

use parking_lot::Mutex;

use super::{seed, ProfileStore, StorageError};
use crate::domain::profiles::Profile;

/// Keeps the collection in process memory. Seeds from the bundled dataset on
/// first load unless constructed with an explicit initial collection.
#[derive(Debug, Default)]
pub struct MemoryStore {
    profiles: Mutex<Option<Vec<Profile>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a known collection instead of the bundled seed.
    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: Mutex::new(Some(profiles)),
        }
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self) -> Result<Vec<Profile>, StorageError> {
        let mut slot = self.profiles.lock();
        if let Some(profiles) = slot.as_ref() {
            return Ok(profiles.clone());
        }
        let seeded = seed::default_profiles()?;
        *slot = Some(seeded.clone());
        Ok(seeded)
    }

    fn save(&self, profiles: &[Profile]) -> Result<(), StorageError> {
        *self.profiles.lock() = Some(profiles.to_vec());
        Ok(())
    }
}
