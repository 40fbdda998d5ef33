//! Profile CRUD service
//!
//! Sits between the shared directory state and the persistence adapter.
//! Every operation sleeps for a fixed interval first, keeping callers honest
//! about the asynchronous contract a real backend would impose. The delays
//! are cosmetic and deliberately not configurable; there is no timeout and
//! no cancellation.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::domain::profiles::{Profile, ProfileDraft};
use crate::domain::validation::FieldErrors;
use crate::error::{Error, Result};
use crate::storage::ProfileStore;

/// Simulated latency for collection reads and writes.
const COLLECTION_DELAY: Duration = Duration::from_millis(500);
/// Simulated latency for single-profile lookups.
const LOOKUP_DELAY: Duration = Duration::from_millis(300);

#[derive(Clone)]
pub struct ProfileService {
    store: Arc<dyn ProfileStore>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Full persisted collection, seeding the store on first use.
    pub async fn list(&self) -> Result<Vec<Profile>> {
        tokio::time::sleep(COLLECTION_DELAY).await;
        Ok(self.store.load()?)
    }

    /// Linear lookup by id. An absent id is not an error.
    pub async fn get(&self, id: i64) -> Result<Option<Profile>> {
        tokio::time::sleep(LOOKUP_DELAY).await;
        let profiles = self.store.load()?;
        Ok(profiles.into_iter().find(|p| p.id == id))
    }

    /// Store a new profile under the next id (1 + current maximum, starting
    /// at 1 for an empty collection) and return it as stored.
    pub async fn add(&self, draft: ProfileDraft) -> Result<Profile> {
        tokio::time::sleep(COLLECTION_DELAY).await;
        let mut profiles = self.store.load()?;
        let id = profiles.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let profile = materialize(id, draft)?;
        profiles.push(profile.clone());
        self.store.save(&profiles)?;
        debug!(id, name = %profile.name, "Profile added");
        Ok(profile)
    }

    /// Replace the profile with the given id in place, preserving its
    /// position in the collection. Fails with `NotFound` when the id is
    /// absent, leaving the collection untouched.
    pub async fn update(&self, id: i64, draft: ProfileDraft) -> Result<Profile> {
        tokio::time::sleep(COLLECTION_DELAY).await;
        let mut profiles = self.store.load()?;
        let Some(slot) = profiles.iter_mut().find(|p| p.id == id) else {
            return Err(Error::not_found(id));
        };
        let profile = materialize(id, draft)?;
        *slot = profile.clone();
        self.store.save(&profiles)?;
        debug!(id, "Profile updated");
        Ok(profile)
    }

    /// Remove the profile with the given id and persist. Removing an absent
    /// id succeeds; delete is idempotent while update on an absent id is an
    /// error.
    pub async fn delete(&self, id: i64) -> Result<()> {
        tokio::time::sleep(COLLECTION_DELAY).await;
        let mut profiles = self.store.load()?;
        let before = profiles.len();
        profiles.retain(|p| p.id != id);
        self.store.save(&profiles)?;
        debug!(id, removed = before - profiles.len(), "Profile deleted");
        Ok(())
    }
}

/// Build the stored record from a draft, coercing the text coordinates to
/// numbers so the persisted fields are always numeric. Unparseable
/// coordinates are rejected here as a backstop; form validation upstream
/// rejects them first.
fn materialize(id: i64, draft: ProfileDraft) -> Result<Profile> {
    let latitude = parse_coordinate("latitude", &draft.latitude)?;
    let longitude = parse_coordinate("longitude", &draft.longitude)?;
    Ok(Profile {
        id,
        name: draft.name,
        description: draft.description,
        full_description: draft.full_description,
        address: draft.address,
        city: draft.city,
        photo: draft.photo,
        latitude,
        longitude,
        contact: draft.contact,
        interests: draft.interests,
    })
}

fn parse_coordinate(field: &'static str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            Error::Validation(FieldErrors::single(field, format!("{field} must be a number")))
        })
}
