//! # Dataset module: the server-side user collection
//!
//! The remote collection is a static JSON file read once per process into a
//! **lazy, process-wide singleton** backed by a [`tokio::sync::OnceCell`].
//! The first call to [`load_users`] resolves the dataset path from
//! [`config`], reads and parses the file, and caches the result for all
//! subsequent callers; the endpoint is read-only, so the cache never
//! invalidates.
//!
//! Configuration comes from `lendview.toml` in the working directory (or the
//! file named by the `LENDVIEW_CONFIG` environment variable, via `dotenvy`).
//! A missing config file means defaults; an unreadable or unparseable
//! *dataset* is an error surfaced to the caller.

use tokio::sync::OnceCell;

use store::{DashboardConfig, User};

static CONFIG: OnceCell<DashboardConfig> = OnceCell::const_new();
static DATASET: OnceCell<Vec<User>> = OnceCell::const_new();

/// Errors reading the user dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Get or load the dashboard configuration.
pub async fn config() -> &'static DashboardConfig {
    CONFIG
        .get_or_init(|| async {
            dotenvy::dotenv().ok();
            let path = std::env::var("LENDVIEW_CONFIG")
                .unwrap_or_else(|_| DashboardConfig::filename().to_string());
            match std::fs::read_to_string(&path) {
                Ok(text) => DashboardConfig::from_toml(&text).unwrap_or_else(|e| {
                    tracing::error!("invalid {path}: {e}; falling back to defaults");
                    DashboardConfig::default()
                }),
                Err(_) => DashboardConfig::default(),
            }
        })
        .await
}

/// Get or initialize the cached user collection.
pub async fn load_users() -> Result<&'static Vec<User>, DatasetError> {
    DATASET
        .get_or_try_init(|| async {
            let path = config().await.source.users_path.clone();
            let raw = std::fs::read_to_string(&path).map_err(|source| DatasetError::Io {
                path: path.clone(),
                source,
            })?;
            let users = parse_users(&raw).map_err(|source| DatasetError::Parse {
                path: path.clone(),
                source,
            })?;
            tracing::info!("loaded {} users from {path}", users.len());
            Ok(users)
        })
        .await
}

fn parse_users(raw: &str) -> Result<Vec<User>, serde_json::Error> {
    serde_json::from_str(raw)
}
