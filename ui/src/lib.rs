//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

mod directory;
pub use directory::make_directory;

mod stat_cards;
pub use stat_cards::StatCards;

mod status_badge;
pub use status_badge::StatusBadge;

mod user_menu;
pub use user_menu::UserMenu;

mod users_table;
pub use users_table::UsersTable;

mod filter_panel;
pub use filter_panel::FilterPanel;

mod pagination;
pub use pagination::Pagination;

pub const COMPONENTS_CSS: Asset = asset!("/assets/styling/components.css");
