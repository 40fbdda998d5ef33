//! Service-level behavior over a real store: id assignment, coercion,
//! in-place updates, idempotent deletes, and seed-then-persist semantics.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use profile_atlas::domain::profiles::{ContactInfo, Profile, ProfileDraft};
use profile_atlas::services::ProfileService;
use profile_atlas::storage::{default_profiles, JsonFileStore, MemoryStore};
use profile_atlas::Error;

fn draft(name: &str, latitude: &str, longitude: &str) -> ProfileDraft {
    ProfileDraft {
        name: name.to_string(),
        description: "A new neighbor".to_string(),
        full_description: "A new neighbor with a longer story.".to_string(),
        address: "1 Main St".to_string(),
        city: "Seattle".to_string(),
        photo: "https://example.com/photo.jpg".to_string(),
        latitude: latitude.to_string(),
        longitude: longitude.to_string(),
        contact: ContactInfo {
            email: Some("new@example.com".to_string()),
            phone: None,
        },
        interests: vec!["walking".to_string()],
    }
}

fn service_with(profiles: Vec<Profile>) -> ProfileService {
    ProfileService::new(Arc::new(MemoryStore::with_profiles(profiles)))
}

fn seeded_service() -> ProfileService {
    ProfileService::new(Arc::new(MemoryStore::new()))
}

#[tokio::test(start_paused = true)]
async fn add_assigns_one_more_than_the_maximum_id() {
    let service = seeded_service();
    let before = service.list().await.unwrap();
    let max_id = before.iter().map(|p| p.id).max().unwrap();

    let added = service.add(draft("A", "10", "20")).await.unwrap();
    assert_eq!(added.id, max_id + 1);

    let after = service.list().await.unwrap();
    assert_eq!(after.iter().filter(|p| p.id == added.id).count(), 1);
}

#[tokio::test(start_paused = true)]
async fn first_add_to_an_empty_collection_gets_id_one() {
    let service = service_with(Vec::new());
    let added = service.add(draft("A", "10", "20")).await.unwrap();
    assert_eq!(added.id, 1);
}

#[tokio::test(start_paused = true)]
async fn get_after_add_returns_the_stored_profile() {
    let service = seeded_service();
    let added = service.add(draft("A", "10", "20")).await.unwrap();

    let fetched = service.get(added.id).await.unwrap();
    assert_eq!(fetched, Some(added));
}

#[tokio::test(start_paused = true)]
async fn get_on_an_absent_id_is_none_not_an_error() {
    let service = seeded_service();
    assert_eq!(service.get(9999).await.unwrap(), None);
}

#[tokio::test(start_paused = true)]
async fn string_coordinates_are_stored_as_numbers() {
    let service = service_with(Vec::new());
    let added = service.add(draft("A", "10", "20")).await.unwrap();

    assert_eq!(added.latitude, 10.0);
    assert_eq!(added.longitude, 20.0);
}

#[tokio::test(start_paused = true)]
async fn unparseable_coordinates_are_rejected() {
    let service = service_with(Vec::new());
    let err = service.add(draft("A", "north", "20")).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test(start_paused = true)]
async fn update_replaces_in_place_and_preserves_the_id() {
    let service = seeded_service();
    let before = service.list().await.unwrap();
    let target = before[1].id;

    let updated = service
        .update(target, draft("Renamed", "1.5", "2.5"))
        .await
        .unwrap();
    assert_eq!(updated.id, target);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.latitude, 1.5);

    let after = service.list().await.unwrap();
    assert_eq!(after.len(), before.len());
    assert_eq!(after[1].id, target);
    assert_eq!(after[1].name, "Renamed");
}

#[tokio::test(start_paused = true)]
async fn update_on_a_missing_id_fails_and_changes_nothing() {
    let service = seeded_service();
    let before = service.list().await.unwrap();

    let err = service.update(999, draft("A", "10", "20")).await.unwrap_err();
    assert!(err.is_not_found());

    assert_eq!(service.list().await.unwrap(), before);
}

#[tokio::test(start_paused = true)]
async fn delete_is_idempotent() {
    let service = seeded_service();
    let target = service.list().await.unwrap()[0].id;

    service.delete(target).await.unwrap();
    assert_eq!(service.get(target).await.unwrap(), None);

    // Deleting again is a no-op, not an error.
    service.delete(target).await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn list_reflects_every_mutation_immediately() {
    let service = service_with(Vec::new());

    let added = service.add(draft("A", "10", "20")).await.unwrap();
    assert_eq!(service.list().await.unwrap(), vec![added.clone()]);

    let updated = service
        .update(added.id, draft("B", "11", "21"))
        .await
        .unwrap();
    assert_eq!(service.list().await.unwrap(), vec![updated]);

    service.delete(added.id).await.unwrap();
    assert_eq!(service.list().await.unwrap(), Vec::<Profile>::new());
}

#[tokio::test(start_paused = true)]
async fn repeated_lists_are_equal_without_reseeding() {
    let service = seeded_service();
    let first = service.list().await.unwrap();
    let second = service.list().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test(start_paused = true)]
async fn empty_store_is_seeded_once_and_then_persisted_state_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profiles.json");

    let service = ProfileService::new(Arc::new(JsonFileStore::new(path.clone())));
    let listed = service.list().await.unwrap();
    assert_eq!(listed, default_profiles().unwrap());

    let removed = listed[0].id;
    service.delete(removed).await.unwrap();

    // A fresh adapter over the same file sees the persisted collection, not
    // the bundled dataset.
    let reopened = ProfileService::new(Arc::new(JsonFileStore::new(path)));
    let relisted = reopened.list().await.unwrap();
    assert_eq!(relisted.len(), default_profiles().unwrap().len() - 1);
    assert!(relisted.iter().all(|p| p.id != removed));
}
