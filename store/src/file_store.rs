//! # Filesystem-backed record store
//!
//! [`FileStore`] is a [`RecordStore`] implementation that persists override
//! snapshots to the local filesystem. It is used on native platforms (desktop
//! builds, local tooling) to retain status overrides across restarts, playing
//! the role localStorage plays in the browser.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── users/
//!     └── <id>.json          # full record snapshot
//! ```
//!
//! Use `dirs::data_dir()` on the caller's side to obtain a
//! platform-appropriate base (e.g. `~/.local/share/lendview/` on Linux).
//!
//! Reads of missing or malformed files report a miss; write errors are
//! swallowed, matching the store contract.

use std::path::PathBuf;

use crate::directory::RecordStore;
use crate::models::User;

/// Filesystem-backed RecordStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn users_dir(&self) -> PathBuf {
        self.base.join("users")
    }

    fn entry_path(&self, id: u64) -> PathBuf {
        self.users_dir().join(format!("{id}.json"))
    }
}

impl RecordStore for FileStore {
    async fn get(&self, id: u64) -> Option<User> {
        let raw = std::fs::read_to_string(self.entry_path(id)).ok()?;
        serde_json::from_str(&raw).ok()
    }

    async fn put(&self, user: &User) {
        let Ok(json) = serde_json::to_string(user) else {
            return;
        };
        let path = self.entry_path(user.id);
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(path, json);
    }

    async fn remove(&self, id: u64) {
        let _ = std::fs::remove_file(self.entry_path(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::models::Status;

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("lendview_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        let user = fixtures::user(1).with_status(Status::Blacklisted);
        store.put(&user).await;

        // Re-open from the same directory.
        let store2 = FileStore::new(dir.clone());
        assert_eq!(store2.get(1).await, Some(user));
        assert_eq!(store2.get(2).await, None);

        store2.remove(1).await;
        assert_eq!(store2.get(1).await, None);

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_malformed_file_reads_as_miss() {
        let dir = std::env::temp_dir().join(format!("lendview_corrupt_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        std::fs::create_dir_all(dir.join("users")).unwrap();
        std::fs::write(dir.join("users/5.json"), "not json at all").unwrap();

        assert_eq!(store.get(5).await, None);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
