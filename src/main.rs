use anyhow::Result;
use std::sync::Arc;

use profile_atlas::config::Settings;
use profile_atlas::logging;
use profile_atlas::search;
use profile_atlas::services::ProfileService;
use profile_atlas::state::Directory;
use profile_atlas::storage::JsonFileStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        store_path = %settings.store_path.display(),
        "Starting profile-atlas"
    );

    // Wire the store, service, and shared directory state
    let store = Arc::new(JsonFileStore::new(settings.store_path.clone()));
    let service = ProfileService::new(store);
    let directory = Directory::new(service);

    // Initial load, seeding the store on first run
    directory.ensure_loaded().await;

    let snapshot = directory.snapshot();
    if let Some(error) = &snapshot.error {
        anyhow::bail!("directory failed to load: {error}");
    }

    tracing::info!(
        profiles = snapshot.profiles.len(),
        cities = search::cities(&snapshot.profiles).len(),
        "Directory ready"
    );

    Ok(())
}
