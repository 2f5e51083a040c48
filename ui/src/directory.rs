//! Shared directory constructor for all platforms.
//!
//! Returns a [`store::Directory`] whose override tier is the appropriate
//! [`store::RecordStore`]:
//! - **Web** (WASM + `web` feature): localStorage via [`store::WebStorageStore`]
//! - **Native** (desktop builds, tooling): filesystem via [`store::FileStore`]
//!
//! The remote tier is always the `list_users` server function
//! ([`api::RemoteUsers`]).

/// Create a platform-appropriate record directory.
pub fn make_directory() -> store::Directory<impl store::RecordStore, api::RemoteUsers> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::Directory::new(store::WebStorageStore::new(), api::RemoteUsers::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("lendview");
        store::Directory::new(store::FileStore::new(base), api::RemoteUsers::new())
    }
}
