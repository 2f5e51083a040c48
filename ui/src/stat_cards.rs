use dioxus::prelude::*;

use store::Summary;

/// Number of customers with savings. Supplied by a product team constant
/// until a savings endpoint exists; there is nothing in the dataset to
/// derive it from.
const USERS_WITH_SAVINGS: usize = 102_453;

/// The four summary cards above the user list.
///
/// All counts come from the *unfiltered* collection: applying a filter
/// narrows the table, never the cards.
#[component]
pub fn StatCards(summary: Summary) -> Element {
    rsx! {
        div {
            class: "stat-cards",
            StatCard {
                icon: "\u{1F465}",
                title: "USERS",
                value: summary.total_users,
            }
            StatCard {
                icon: "\u{1F464}",
                title: "ACTIVE USERS",
                value: summary.active_users,
            }
            StatCard {
                icon: "\u{1F4C4}",
                title: "USERS WITH LOANS",
                value: summary.users_with_loans,
            }
            StatCard {
                icon: "\u{1F4B0}",
                title: "USERS WITH SAVINGS",
                value: USERS_WITH_SAVINGS,
            }
        }
    }
}

#[component]
fn StatCard(icon: &'static str, title: &'static str, value: usize) -> Element {
    rsx! {
        div {
            class: "stat-card",
            span { class: "stat-card-icon", "{icon}" }
            span { class: "stat-card-title", "{title}" }
            span { class: "stat-card-value", "{value}" }
        }
    }
}
