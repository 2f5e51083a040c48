use dioxus::prelude::*;

/// Per-row action menu: view details, blacklist, activate.
///
/// Blacklist/activate are local-only overrides; they never propagate to the
/// remote collection.
#[component]
pub fn UserMenu(
    user_id: u64,
    on_view: EventHandler<u64>,
    on_blacklist: EventHandler<u64>,
    on_activate: EventHandler<u64>,
) -> Element {
    rsx! {
        div {
            class: "user-menu",
            button {
                onclick: move |_| on_view.call(user_id),
                span { class: "icon", "\u{1F441}" }
                "View Details"
            }
            button {
                onclick: move |_| on_blacklist.call(user_id),
                span { class: "icon", "\u{26D4}" }
                "Blacklist User"
            }
            button {
                onclick: move |_| on_activate.call(user_id),
                span { class: "icon", "\u{2705}" }
                "Activate User"
            }
        }
    }
}
