//! List-view search helpers
//!
//! Filtering is synchronous; [`Debouncer`] keeps keystroke-driven
//! re-evaluation from running on every character.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::domain::profiles::Profile;

/// Quiet period after the last keystroke before a search runs.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Case-insensitive substring match on the name, plus an exact city filter.
/// An empty or absent city means no city filter.
pub fn filter_profiles<'a>(
    profiles: &'a [Profile],
    query: &str,
    city: Option<&str>,
) -> Vec<&'a Profile> {
    let query = query.to_lowercase();
    let city = city.filter(|c| !c.is_empty());
    profiles
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&query))
        .filter(|p| city.map_or(true, |c| p.city == c))
        .collect()
}

/// Unique city names for the filter dropdown, sorted.
pub fn cities(profiles: &[Profile]) -> Vec<String> {
    let mut cities: Vec<String> = profiles.iter().map(|p| p.city.clone()).collect();
    cities.sort();
    cities.dedup();
    cities
}

/// Trailing-edge debouncer: each call cancels the previously scheduled one,
/// so only the last call within the quiet period actually runs.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `action` to run after the quiet period, cancelling whatever
    /// was scheduled before it.
    pub fn call<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            action();
        }));
    }

    /// Drop whatever is still scheduled (view unmount).
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
