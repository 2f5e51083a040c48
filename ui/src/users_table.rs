use dioxus::prelude::*;

use store::User;

use crate::{StatusBadge, UserMenu};

const TABLE_CSS: Asset = asset!("/assets/styling/users_table.css");

/// The user list table: one row per record of the current page window,
/// with a status badge and a toggleable action menu per row.
#[component]
pub fn UsersTable(
    users: Vec<User>,
    on_view: EventHandler<u64>,
    on_blacklist: EventHandler<u64>,
    on_activate: EventHandler<u64>,
) -> Element {
    // Id of the row whose action menu is open, if any.
    let mut open_menu = use_signal(|| Option::<u64>::None);

    rsx! {
        document::Stylesheet { href: TABLE_CSS }

        table {
            class: "users-table",
            thead {
                tr {
                    th { "ORGANIZATION" }
                    th { "USERNAME" }
                    th { "EMAIL" }
                    th { "PHONE NUMBER" }
                    th { "DATE JOINED" }
                    th { "STATUS" }
                    th {}
                }
            }
            tbody {
                for user in users {
                    tr {
                        key: "{user.id}",
                        td { "{user.organization}" }
                        td {
                            a {
                                class: "users-table-name",
                                onclick: {
                                    let id = user.id;
                                    move |_| on_view.call(id)
                                },
                                "{user.user_name}"
                            }
                        }
                        td { "{user.email_address}" }
                        td { "{user.phone_number}" }
                        td { "{user.date_joined_display()}" }
                        td {
                            StatusBadge { status: user.effective_status() }
                        }
                        td {
                            class: "users-table-actions",
                            button {
                                class: "users-table-menu-toggle",
                                onclick: {
                                    let id = user.id;
                                    move |_| {
                                        let next = if open_menu() == Some(id) { None } else { Some(id) };
                                        open_menu.set(next);
                                    }
                                },
                                "\u{22EE}"
                            }
                            if open_menu() == Some(user.id) {
                                UserMenu {
                                    user_id: user.id,
                                    on_view: move |id| {
                                        open_menu.set(None);
                                        on_view.call(id);
                                    },
                                    on_blacklist: move |id| {
                                        open_menu.set(None);
                                        on_blacklist.call(id);
                                    },
                                    on_activate: move |id| {
                                        open_menu.set(None);
                                        on_activate.call(id);
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
