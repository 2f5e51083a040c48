//! # API crate: shared fullstack server functions for Lendview
//!
//! Defines the Dioxus server functions the web frontend calls, along with the
//! server-side dataset loader they depend on. Each public `#[server]` fn is
//! compiled twice: once with full server logic and once as a thin client stub
//! that forwards the call over HTTP.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`dataset`] | `server` | Loads the JSON user dataset into a lazy `OnceCell` singleton |
//!
//! ## Server functions
//!
//! - [`list_users`]: the single read-only collection endpoint: the full
//!   user dataset as a JSON array. No parameters, no authentication. Any IO
//!   or parse failure surfaces as an error, never as an empty collection.
//! - [`dashboard_config`]: the server's `lendview.toml` settings (page
//!   size, dataset path) for the client to render with.
//!
//! ## Client-side adapter
//!
//! [`RemoteUsers`] implements [`store::UserSource`] over [`list_users`], so a
//! [`store::Directory`] on the client treats the server function as its
//! remote origin.

use dioxus::prelude::*;

#[cfg(feature = "server")]
pub mod dataset;

use store::{SourceError, UserSource};

pub use store::{DashboardConfig, User};

/// Fetch the full user collection from the server.
#[server]
pub async fn list_users() -> Result<Vec<User>, ServerFnError> {
    let users = dataset::load_users()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(users.clone())
}

/// Fetch the dashboard configuration the server was started with.
#[server(DashboardConfigFn)]
pub async fn dashboard_config() -> Result<DashboardConfig, ServerFnError> {
    Ok(dataset::config().await.clone())
}

/// The remote tier of the record directory: the `list_users` server function.
#[derive(Clone, Copy, Debug, Default)]
pub struct RemoteUsers;

impl RemoteUsers {
    pub fn new() -> Self {
        Self
    }
}

impl UserSource for RemoteUsers {
    async fn fetch_all(&self) -> Result<Vec<User>, SourceError> {
        list_users()
            .await
            .map_err(|e| SourceError(e.to_string()))
    }
}
