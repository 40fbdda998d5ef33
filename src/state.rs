//! Shared directory state
//!
//! One instance is created at application start and handed to every consumer
//! as an `Arc`; views read snapshots and funnel mutations through it so the
//! cached collection stays in step with what the service persisted. The lock
//! is only held for synchronous cache mutation, never across an await.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::domain::profiles::{Profile, ProfileDraft};
use crate::error::Result;
use crate::services::ProfileService;

/// Point-in-time view of the directory for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectorySnapshot {
    pub profiles: Vec<Profile>,
    pub loading: bool,
    pub error: Option<String>,
}

struct Inner {
    profiles: Vec<Profile>,
    loading: bool,
    error: Option<String>,
}

/// Application-wide profile cache.
pub struct Directory {
    service: ProfileService,
    inner: RwLock<Inner>,
    auto_loaded: AtomicBool,
}

impl Directory {
    pub fn new(service: ProfileService) -> Arc<Self> {
        Arc::new(Self {
            service,
            inner: RwLock::new(Inner {
                profiles: Vec::new(),
                loading: true,
                error: None,
            }),
            auto_loaded: AtomicBool::new(false),
        })
    }

    /// The underlying service, for views that fetch a single profile
    /// directly (detail and edit pages).
    pub fn service(&self) -> &ProfileService {
        &self.service
    }

    /// Current collection and status, cloned out for rendering.
    pub fn snapshot(&self) -> DirectorySnapshot {
        let inner = self.inner.read();
        DirectorySnapshot {
            profiles: inner.profiles.clone(),
            loading: inner.loading,
            error: inner.error.clone(),
        }
    }

    /// First-consumer-mount hook: runs the initial load at most once per
    /// session no matter how many views call it. Explicit retries go through
    /// [`Directory::load`].
    pub async fn ensure_loaded(&self) {
        if self.auto_loaded.swap(true, Ordering::SeqCst) {
            return;
        }
        self.load().await;
    }

    /// Refresh the cache from the service, unless it is already populated
    /// and healthy. Always leaves `loading` cleared.
    pub async fn load(&self) {
        {
            let inner = self.inner.read();
            if !inner.profiles.is_empty() && inner.error.is_none() {
                return;
            }
        }

        {
            let mut inner = self.inner.write();
            inner.loading = true;
            inner.error = None;
        }

        match self.service.list().await {
            Ok(profiles) => {
                debug!(count = profiles.len(), "Directory loaded");
                self.inner.write().profiles = profiles;
            }
            Err(err) => {
                warn!(error = %err, "Directory load failed");
                self.inner.write().error = Some(err.to_string());
            }
        }

        self.inner.write().loading = false;
    }

    /// Add through the service and append to the cache on success. Failures
    /// are recorded in the snapshot error and re-raised to the caller.
    pub async fn add(&self, draft: ProfileDraft) -> Result<Profile> {
        match self.service.add(draft).await {
            Ok(profile) => {
                self.inner.write().profiles.push(profile.clone());
                Ok(profile)
            }
            Err(err) => Err(self.record(err)),
        }
    }

    /// Update through the service and replace the cached entry on success.
    pub async fn update(&self, id: i64, draft: ProfileDraft) -> Result<Profile> {
        match self.service.update(id, draft).await {
            Ok(profile) => {
                let mut inner = self.inner.write();
                if let Some(slot) = inner.profiles.iter_mut().find(|p| p.id == id) {
                    *slot = profile.clone();
                }
                Ok(profile)
            }
            Err(err) => Err(self.record(err)),
        }
    }

    /// Delete through the service and drop the cached entry on success.
    pub async fn delete(&self, id: i64) -> Result<()> {
        match self.service.delete(id).await {
            Ok(()) => {
                self.inner.write().profiles.retain(|p| p.id != id);
                Ok(())
            }
            Err(err) => Err(self.record(err)),
        }
    }

    fn record(&self, err: crate::error::Error) -> crate::error::Error {
        self.inner.write().error = Some(err.to_string());
        err
    }
}
