use dioxus::prelude::*;

use store::Status;

/// Colored pill showing a record's effective status.
#[component]
pub fn StatusBadge(status: Status) -> Element {
    let class = match status {
        Status::Active => "status-badge status-badge--active",
        Status::Inactive => "status-badge status-badge--inactive",
        Status::Pending => "status-badge status-badge--pending",
        Status::Blacklisted => "status-badge status-badge--blacklisted",
    };

    rsx! {
        span {
            class: "{class}",
            "{status.label()}"
        }
    }
}
