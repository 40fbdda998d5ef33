//! Profile persistence
//!
//! The directory persists one JSON-serialized collection under one key.
//! [`ProfileStore`] abstracts the medium so the service never couples to it:
//! [`JsonFileStore`] is the shipping adapter and [`MemoryStore`] backs tests
//! and ephemeral runs.

mod json_file;
mod memory;
mod seed;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use seed::default_profiles;

use thiserror::Error;

use crate::domain::profiles::Profile;

/// Errors raised by a persistence adapter.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("profile data is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A key-value persistence adapter for the profile collection.
///
/// Methods take `&self`; implementations use interior mutability where they
/// need it. The first `load` against an empty medium must seed it with the
/// bundled default dataset and return that dataset; every later `load`
/// returns what was persisted, even if the bundled dataset changes.
pub trait ProfileStore: Send + Sync {
    fn load(&self) -> Result<Vec<Profile>, StorageError>;

    /// Replace the persisted collection wholesale. Every write is
    /// all-or-nothing against the single key.
    fn save(&self, profiles: &[Profile]) -> Result<(), StorageError>;
}
