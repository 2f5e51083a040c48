pub mod config;
pub mod criteria;
pub mod models;
pub mod page;
pub mod stats;

pub mod directory;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_storage::WebStorageStore;

pub use config::DashboardConfig;
pub use criteria::Criteria;
pub use directory::{Directory, RecordStore, ResolveError, SourceError, StaticSource, UserSource};
pub use models::{Guarantor, Socials, Status, User};
pub use page::{has_next, has_prev, pager_items, paginate, total_pages, PageWindow, PagerItem};
pub use stats::{summarize, Summary};

#[cfg(test)]
pub(crate) mod fixtures;
