use dioxus::prelude::*;

use store::{criteria, paginate, summarize, Criteria, Status, User};
use ui::{make_directory, FilterPanel, Pagination, StatCards, UsersTable};

use crate::Route;

const USERS_CSS: Asset = asset!("/assets/users.css");

#[component]
pub fn Users() -> Element {
    let mut users = use_signal(Vec::<User>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut filters = use_signal(Criteria::default);
    let mut page = use_signal(|| 1u32);
    let mut page_size = use_signal(|| 10u32);
    let mut show_filter = use_signal(|| false);
    let nav = use_navigator();

    // Load the collection and page size on mount
    let _loader = use_resource(move || async move {
        if let Ok(config) = api::dashboard_config().await {
            page_size.set(config.list.page_size);
        }
        match api::list_users().await {
            Ok(fetched) => {
                users.set(fetched);
                error.set(None);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
        loading.set(false);
    });

    let on_filter = move |next: Criteria| {
        filters.set(next);
        page.set(1);
    };

    let on_view = move |id: u64| {
        nav.push(Route::UserDetail { user_id: id });
    };

    let mut set_status = move |id: u64, status: Status| {
        spawn(async move {
            let directory = make_directory();
            match directory.apply_status_change(id, status).await {
                Ok(updated) => {
                    let mut list = users.write();
                    if let Some(slot) = list.iter_mut().find(|u| u.id == id) {
                        *slot = updated;
                    }
                }
                Err(e) => tracing::warn!("status change for user {id} failed: {e}"),
            }
        });
    };

    let all = users();
    let summary = summarize(&all);
    let active_filters = filters();
    let filtered = criteria::apply(&all, &active_filters);
    let total_filtered = filtered.len();
    let window = paginate(&filtered, page(), page_size());

    rsx! {
        document::Stylesheet { href: USERS_CSS }

        div {
            class: "users-page",

            h1 { class: "users-page-title", "Users" }

            StatCards { summary: summary }

            div {
                class: "users-page-toolbar",
                button {
                    class: "users-page-filter-toggle",
                    onclick: move |_| {
                        let next = !show_filter();
                        show_filter.set(next);
                    },
                    "Filter"
                }
            }

            if show_filter() {
                FilterPanel {
                    organizations: organizations(&all),
                    on_filter: on_filter,
                }
            }

            if loading() {
                div { class: "users-page-state", "Loading users..." }
            } else if let Some(message) = error() {
                div {
                    class: "users-page-state users-page-error",
                    "Error loading users: {message}"
                }
            } else if total_filtered == 0 {
                div { class: "users-page-state", "No users found" }
            } else {
                UsersTable {
                    users: window.items.clone(),
                    on_view: on_view,
                    on_blacklist: move |id| set_status(id, Status::Blacklisted),
                    on_activate: move |id| set_status(id, Status::Active),
                }
                Pagination {
                    window: window.clone(),
                    on_page_change: move |next| page.set(next),
                }
            }
        }
    }
}

/// Distinct organization names for the filter dropdown, in first-seen order.
fn organizations(users: &[User]) -> Vec<String> {
    let mut seen = Vec::new();
    for user in users {
        if !seen.contains(&user.organization) {
            seen.push(user.organization.clone());
        }
    }
    seen
}
