use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::directory::RecordStore;
use crate::models::User;

/// In-memory RecordStore for testing and native fallback.
///
/// Entries are held as raw JSON strings, matching what the persistent
/// backends store, so tests can seed malformed payloads with
/// [`MemoryStore::put_raw`].
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<u64, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an arbitrary payload under an id, bypassing serialization.
    pub fn put_raw(&self, id: u64, raw: &str) {
        self.entries.lock().unwrap().insert(id, raw.to_string());
    }
}

impl RecordStore for MemoryStore {
    async fn get(&self, id: u64) -> Option<User> {
        let raw = self.entries.lock().unwrap().get(&id).cloned()?;
        // Malformed entry reads as a cache miss.
        serde_json::from_str(&raw).ok()
    }

    async fn put(&self, user: &User) {
        if let Ok(json) = serde_json::to_string(user) {
            self.entries.lock().unwrap().insert(user.id, json);
        }
    }

    async fn remove(&self, id: u64) {
        self.entries.lock().unwrap().remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::directory::{
        Directory, ResolveError, SourceError, StaticSource, UserSource,
    };
    use crate::fixtures;
    use crate::models::Status;

    /// A source that counts how many times it was consulted.
    #[derive(Clone)]
    struct CountingSource {
        users: Vec<User>,
        calls: Arc<AtomicUsize>,
    }

    impl CountingSource {
        fn new(users: Vec<User>) -> Self {
            Self {
                users,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl UserSource for CountingSource {
        async fn fetch_all(&self) -> Result<Vec<User>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.users.clone())
        }
    }

    /// A source whose fetch always fails.
    struct FailingSource;

    impl UserSource for FailingSource {
        async fn fetch_all(&self) -> Result<Vec<User>, SourceError> {
            Err(SourceError("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_save_and_get_round_trip() {
        let store = MemoryStore::new();
        let user = fixtures::user(1);

        store.put(&user).await;
        assert_eq!(store.get(1).await, Some(user));
    }

    #[tokio::test]
    async fn test_get_on_empty_store_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get(999).await, None);
    }

    #[tokio::test]
    async fn test_corrupt_entry_reads_as_miss() {
        let store = MemoryStore::new();
        store.put_raw(1, "invalid json");
        assert_eq!(store.get(1).await, None);
    }

    #[tokio::test]
    async fn test_remove_clears_entry() {
        let store = MemoryStore::new();
        store.put(&fixtures::user(4)).await;
        store.remove(4).await;
        assert_eq!(store.get(4).await, None);
    }

    #[tokio::test]
    async fn test_resolve_populates_override_store() {
        let source = CountingSource::new(fixtures::users(3));
        let directory = Directory::new(MemoryStore::new(), source.clone());

        let first = directory.resolve(2).await.unwrap();
        assert_eq!(first.id, 2);
        assert_eq!(source.calls(), 1);

        // Second resolution is served from the override store.
        let second = directory.resolve(2).await.unwrap();
        assert_eq!(second, first);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_resolve_prefers_override_entry() {
        let store = MemoryStore::new();
        let overridden = fixtures::user(1).with_status(Status::Blacklisted);
        store.put(&overridden).await;

        let source = CountingSource::new(fixtures::users(3));
        let directory = Directory::new(store, source.clone());

        let resolved = directory.resolve(1).await.unwrap();
        assert_eq!(resolved.effective_status(), Status::Blacklisted);
        // Remote source was never consulted.
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_resolve_unknown_id_is_not_found() {
        let directory =
            Directory::new(MemoryStore::new(), StaticSource::new(fixtures::users(3)));

        assert_eq!(
            directory.resolve(99).await,
            Err(ResolveError::NotFound(99))
        );
    }

    #[tokio::test]
    async fn test_resolve_surfaces_fetch_failure() {
        let store = MemoryStore::new();
        let directory = Directory::new(store.clone(), FailingSource);

        let err = directory.resolve(1).await.unwrap_err();
        assert!(matches!(err, ResolveError::FetchFailed(_)));

        // Failed fetch leaves the store unchanged.
        assert_eq!(store.get(1).await, None);
    }

    #[tokio::test]
    async fn test_corrupt_override_falls_through_to_remote() {
        let store = MemoryStore::new();
        store.put_raw(1, "{not json");

        let source = CountingSource::new(fixtures::users(1));
        let directory = Directory::new(store, source.clone());

        let resolved = directory.resolve(1).await.unwrap();
        assert_eq!(resolved.id, 1);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_apply_status_change_persists_snapshot() {
        let store = MemoryStore::new();
        let source = StaticSource::new(fixtures::users(2));
        let directory = Directory::new(store, source);

        let updated = directory
            .apply_status_change(1, Status::Blacklisted)
            .await
            .unwrap();
        assert_eq!(updated.status, Some(Status::Blacklisted));

        // The override survives and all other fields are unchanged.
        let resolved = directory.resolve(1).await.unwrap();
        assert_eq!(resolved.effective_status(), Status::Blacklisted);
        assert_eq!(resolved.full_name, fixtures::user(1).full_name);
        assert_eq!(resolved.guarantors, fixtures::user(1).guarantors);

        // Reactivation overwrites the earlier entry wholesale.
        let reactivated = directory
            .apply_status_change(1, Status::Active)
            .await
            .unwrap();
        assert_eq!(reactivated.status, Some(Status::Active));
        assert_eq!(
            directory.resolve(1).await.unwrap().effective_status(),
            Status::Active
        );
    }

    #[tokio::test]
    async fn test_forget_restores_remote_view() {
        let directory =
            Directory::new(MemoryStore::new(), StaticSource::new(fixtures::users(1)));

        directory
            .apply_status_change(1, Status::Blacklisted)
            .await
            .unwrap();
        directory.forget(1).await;

        // With the override gone, the remote record wins again.
        let resolved = directory.resolve(1).await.unwrap();
        assert_eq!(resolved.status, None);
    }
}
