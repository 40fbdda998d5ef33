//! Bundled default dataset

use super::StorageError;
use crate::domain::profiles::Profile;

const SEED_JSON: &str = include_str!("seed_profiles.json");

/// Parse the dataset bundled into the binary.
///
/// Used only to seed an empty store; once a collection has been persisted,
/// the stored copy wins over any change made here.
pub fn default_profiles() -> Result<Vec<Profile>, StorageError> {
    Ok(serde_json::from_str(SEED_JSON)?)
}
