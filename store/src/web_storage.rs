//! # localStorage-backed record store for the browser
//!
//! [`WebStorageStore`] is the [`RecordStore`] implementation used on the
//! **web platform**. It persists override snapshots into the browser's
//! `localStorage` via `web-sys`, under keys of the form
//! `lendview_user_<id>`, so status overrides survive reloads and shadow the
//! remote dataset on subsequent visits.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors: an unavailable `Storage`
//! (private browsing), a quota-exceeded write, or a malformed stored value
//! degrades to "no local data" rather than crashing the view. The
//! authoritative copy of the collection always lives at the remote endpoint;
//! only the overrides are local.

use web_sys::Storage;

use crate::directory::RecordStore;
use crate::models::User;

const KEY_PREFIX: &str = "lendview_user_";

/// localStorage-backed RecordStore for the web platform.
///
/// Zero-size and `Clone`-friendly: the `Storage` handle is looked up from the
/// window on every operation, which the browser serves from its own cache.
#[derive(Clone, Debug, Default)]
pub struct WebStorageStore;

impl WebStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    fn key(id: u64) -> String {
        format!("{KEY_PREFIX}{id}")
    }
}

impl RecordStore for WebStorageStore {
    async fn get(&self, id: u64) -> Option<User> {
        let storage = Self::storage()?;
        let raw = storage.get_item(&Self::key(id)).ok()??;
        // Pre-existing malformed values at the key read as a miss.
        serde_json::from_str(&raw).ok()
    }

    async fn put(&self, user: &User) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let Ok(json) = serde_json::to_string(user) else {
            return;
        };
        // Quota errors are ignored; in-memory state stays authoritative.
        let _ = storage.set_item(&Self::key(user.id), &json);
    }

    async fn remove(&self, id: u64) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&Self::key(id));
        }
    }
}
