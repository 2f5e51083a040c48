use chrono::NaiveDate;
use dioxus::prelude::*;

use store::{Criteria, Status};

/// Filter form for the user list.
///
/// Emits a [`Criteria`] on submit with empty fields left out; Reset emits the
/// empty criteria set (show everything) and clears the form. The caller is
/// responsible for resetting the current page to 1 when criteria change.
#[component]
pub fn FilterPanel(organizations: Vec<String>, on_filter: EventHandler<Criteria>) -> Element {
    let mut organization = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut phone_number = use_signal(String::new);
    let mut status = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let opt = |s: String| if s.trim().is_empty() { None } else { Some(s) };
        on_filter.call(Criteria {
            organization: opt(organization()),
            username: opt(username()),
            email: opt(email()),
            date: NaiveDate::parse_from_str(date().trim(), "%Y-%m-%d").ok(),
            phone_number: opt(phone_number()),
            status: opt(status()),
        });
    };

    let reset = move |_| {
        organization.set(String::new());
        username.set(String::new());
        email.set(String::new());
        date.set(String::new());
        phone_number.set(String::new());
        status.set(String::new());
        on_filter.call(Criteria::default());
    };

    rsx! {
        form {
            class: "filter-panel",
            onsubmit: submit,

            div {
                class: "filter-panel-field",
                label { "Organization" }
                select {
                    value: organization(),
                    onchange: move |evt| organization.set(evt.value()),
                    option { value: "", "Select" }
                    for org in organizations {
                        option { key: "{org}", value: "{org}", "{org}" }
                    }
                }
            }

            div {
                class: "filter-panel-field",
                label { "Username" }
                input {
                    r#type: "text",
                    placeholder: "User",
                    value: username(),
                    oninput: move |evt| username.set(evt.value()),
                }
            }

            div {
                class: "filter-panel-field",
                label { "Email" }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
            }

            div {
                class: "filter-panel-field",
                label { "Date" }
                input {
                    r#type: "date",
                    value: date(),
                    oninput: move |evt| date.set(evt.value()),
                }
            }

            div {
                class: "filter-panel-field",
                label { "Phone Number" }
                input {
                    r#type: "tel",
                    placeholder: "Phone Number",
                    value: phone_number(),
                    oninput: move |evt| phone_number.set(evt.value()),
                }
            }

            div {
                class: "filter-panel-field",
                label { "Status" }
                select {
                    value: status(),
                    onchange: move |evt| status.set(evt.value()),
                    option { value: "", "Select" }
                    for s in Status::all() {
                        option { key: "{s.label()}", value: "{s.label()}", "{s.label()}" }
                    }
                }
            }

            div {
                class: "filter-panel-buttons",
                button {
                    r#type: "button",
                    class: "filter-panel-reset",
                    onclick: reset,
                    "Reset"
                }
                button {
                    r#type: "submit",
                    class: "filter-panel-apply",
                    "Filter"
                }
            }
        }
    }
}
