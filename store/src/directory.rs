//! # Directory: two-tier lookup over an abstract record store
//!
//! This module is the core of Lendview's data layer. [`Directory`] resolves a
//! customer record by id against two tiers: a local **override store** that is
//! consulted first and a read-only **remote collection** that is consulted only
//! on a miss. All local reads and writes go through the [`RecordStore`] trait,
//! so the same logic works against an in-memory store (tests), the browser's
//! localStorage ([`crate::WebStorageStore`]), or the filesystem
//! ([`crate::FileStore`]). The remote side is the [`UserSource`] trait, so the
//! origin can be swapped (server function, static fixture) without touching
//! callers.
//!
//! ## Resolution
//!
//! [`resolve`](Directory::resolve) follows a cache-first,
//! origin-fallback-with-populate policy:
//!
//! 1. An override entry for the id shadows the remote record wholesale and is
//!    returned immediately; the origin is not consulted.
//! 2. Otherwise the full remote collection is fetched. A fetch failure
//!    surfaces as [`ResolveError::FetchFailed`] and leaves the store
//!    untouched.
//! 3. A located record is written through into the override store (the next
//!    resolution for the same id skips the network) and returned.
//! 4. An id absent from both tiers is [`ResolveError::NotFound`].
//!
//! ## Overrides
//!
//! [`apply_status_change`](Directory::apply_status_change) replaces a record's
//! status and persists the whole new snapshot under the same key,
//! last-writer-wins. There is no field-by-field merging and no partial-write
//! state: the override entry is always a complete record.
//!
//! A malformed override entry never reaches this layer; backends recover it
//! to a cache miss, so resolution falls through to the remote lookup.

use crate::models::{Status, User};

/// Async trait for the local override store.
///
/// Implementations must treat a never-written or unparseable entry as absent
/// (`None`) and must swallow write failures (quota, IO): the in-memory state
/// stays authoritative for the session even if persistence silently fails.
pub trait RecordStore {
    fn get(&self, id: u64) -> impl std::future::Future<Output = Option<User>>;
    fn put(&self, user: &User) -> impl std::future::Future<Output = ()>;
    fn remove(&self, id: u64) -> impl std::future::Future<Output = ()>;
}

/// Async trait for the read-only remote user collection.
pub trait UserSource {
    fn fetch_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<User>, SourceError>>;
}

/// The remote collection could not be read (network, non-OK response, parse).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("failed to load the user collection: {0}")]
pub struct SourceError(pub String);

/// Outcome of a failed [`Directory::resolve`].
///
/// The two variants are distinct, user-visible states: "User not found" versus
/// "Error loading user details".
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("user {0} not found")]
    NotFound(u64),
    #[error(transparent)]
    FetchFailed(#[from] SourceError),
}

/// Two-tier customer record lookup: override store first, remote fallback.
pub struct Directory<S: RecordStore, R: UserSource> {
    store: S,
    source: R,
}

impl<S: RecordStore, R: UserSource> Directory<S, R> {
    pub fn new(store: S, source: R) -> Self {
        Self { store, source }
    }

    /// Resolve a record by id, preferring the override store.
    pub async fn resolve(&self, id: u64) -> Result<User, ResolveError> {
        if let Some(local) = self.store.get(id).await {
            return Ok(local);
        }

        let users = self.source.fetch_all().await?;
        match users.into_iter().find(|u| u.id == id) {
            Some(user) => {
                self.store.put(&user).await;
                Ok(user)
            }
            None => Err(ResolveError::NotFound(id)),
        }
    }

    /// Fetch the full remote collection, bypassing the override store.
    ///
    /// List views read the collection directly; per-record overrides only
    /// shadow detail resolution.
    pub async fn fetch_all(&self) -> Result<Vec<User>, SourceError> {
        self.source.fetch_all().await
    }

    /// Replace a record's status and persist the new snapshot.
    ///
    /// Resolves the current record (override-first), produces a copy with
    /// `status` replaced wholesale, and writes it under the same key. Returns
    /// the updated record.
    pub async fn apply_status_change(
        &self,
        id: u64,
        status: Status,
    ) -> Result<User, ResolveError> {
        let current = self.resolve(id).await?;
        let updated = current.with_status(status);
        self.store.put(&updated).await;
        Ok(updated)
    }

    /// Drop the override entry for an id, if any.
    pub async fn forget(&self, id: u64) {
        self.store.remove(id).await;
    }
}

/// A fixed in-memory collection, used as a test source.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    users: Vec<User>,
}

impl StaticSource {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

impl UserSource for StaticSource {
    async fn fetch_all(&self) -> Result<Vec<User>, SourceError> {
        Ok(self.users.clone())
    }
}
