use dioxus::prelude::*;

use store::{ResolveError, Status, User};
use ui::{make_directory, StatusBadge};

use crate::Route;

const USER_DETAIL_CSS: Asset = asset!("/assets/user_detail.css");

#[derive(Clone, PartialEq)]
enum DetailState {
    Loading,
    Ready(User),
    NotFound,
    Failed(String),
}

#[component]
pub fn UserDetail(user_id: u64) -> Element {
    // Track the id in a signal so the loader re-runs on route param change
    let mut id_signal = use_signal(|| user_id);
    if *id_signal.peek() != user_id {
        id_signal.set(user_id);
    }

    let mut state = use_signal(|| DetailState::Loading);
    let nav = use_navigator();

    // Resolve the record (override store first, then the remote collection)
    let _loader = use_resource(move || {
        let id = id_signal();
        async move {
            state.set(DetailState::Loading);
            let directory = make_directory();
            match directory.resolve(id).await {
                Ok(user) => state.set(DetailState::Ready(user)),
                Err(ResolveError::NotFound(_)) => state.set(DetailState::NotFound),
                Err(ResolveError::FetchFailed(e)) => state.set(DetailState::Failed(e.to_string())),
            }
        }
    });

    let mut set_status = move |status: Status| {
        let id = id_signal();
        spawn(async move {
            let directory = make_directory();
            match directory.apply_status_change(id, status).await {
                Ok(updated) => state.set(DetailState::Ready(updated)),
                Err(e) => tracing::warn!("status change for user {id} failed: {e}"),
            }
        });
    };

    let body = match state() {
        DetailState::Loading => rsx! {
            div { class: "user-detail-state", "Loading user details..." }
        },
        DetailState::NotFound => rsx! {
            div { class: "user-detail-state", "User not found" }
        },
        DetailState::Failed(message) => rsx! {
            div {
                class: "user-detail-state user-detail-error",
                "Error loading user details: {message}"
            }
        },
        DetailState::Ready(user) => rsx! {
            div {
                class: "user-detail-header",
                h1 { "User Details" }
                div {
                    class: "user-detail-actions",
                    button {
                        class: "blacklist",
                        onclick: move |_| set_status(Status::Blacklisted),
                        "BLACKLIST USER"
                    }
                    button {
                        class: "activate",
                        onclick: move |_| set_status(Status::Active),
                        "ACTIVATE USER"
                    }
                }
            }

            UserSummaryCard { user: user.clone() }
            UserDetailsCard { user: user }
        },
    };

    rsx! {
        document::Stylesheet { href: USER_DETAIL_CSS }

        div {
            class: "user-detail-page",

            a {
                class: "user-detail-back",
                onclick: move |_| {
                    nav.push(Route::Users {});
                },
                "\u{2190} Back to Users"
            }

            {body}
        }
    }
}

/// Name, id and status banner above the detail sections, with the tab row.
#[component]
fn UserSummaryCard(user: User) -> Element {
    let initial = user.full_name.chars().next().unwrap_or('?');

    rsx! {
        div {
            class: "user-summary-card",
            div {
                class: "user-summary-identity",
                div { class: "user-summary-avatar", "{initial}" }
                div {
                    h2 { "{user.full_name}" }
                    p { class: "user-summary-id", "{user.bvn}" }
                }
                div {
                    class: "user-summary-status",
                    span { "Account Status" }
                    StatusBadge { status: user.effective_status() }
                }
            }
            div {
                class: "user-summary-tabs",
                span { class: "active", "General Details" }
                span { "Documents" }
                span { "Bank Details" }
                span { "Loans" }
                span { "Savings" }
                span { "App and System" }
            }
        }
    }
}

#[component]
fn UserDetailsCard(user: User) -> Element {
    rsx! {
        div {
            class: "user-details-card",

            section {
                h3 { "Personal Information" }
                div {
                    class: "user-details-grid",
                    DetailField { label: "Full Name", value: user.full_name.clone() }
                    DetailField { label: "Phone Number", value: user.phone_number.clone() }
                    DetailField { label: "Email Address", value: user.email_address.clone() }
                    DetailField { label: "BVN", value: user.bvn.clone() }
                    DetailField { label: "Gender", value: user.gender.clone() }
                    DetailField { label: "Marital Status", value: user.marital_status.clone() }
                    DetailField { label: "Children", value: user.children.clone() }
                    DetailField { label: "Type of Residence", value: user.type_of_residence.clone() }
                }
            }

            section {
                h3 { "Education and Employment" }
                div {
                    class: "user-details-grid",
                    DetailField { label: "Level of Education", value: user.education_level.clone() }
                    DetailField { label: "Employment Status", value: user.employment_status.clone() }
                    DetailField { label: "Sector of Employment", value: user.sector_of_employment.clone() }
                    DetailField { label: "Duration of Employment", value: user.duration_of_employment.clone() }
                    DetailField { label: "Office Email", value: user.office_email.clone() }
                    DetailField { label: "Monthly Income", value: user.monthly_income.clone() }
                    DetailField {
                        label: "Loan Repayment",
                        value: format!("{:.0}", user.loan_repayment),
                    }
                }
            }

            section {
                h3 { "Socials" }
                div {
                    class: "user-details-grid",
                    DetailField { label: "Twitter", value: user.socials.twitter.clone() }
                    DetailField { label: "Facebook", value: user.socials.facebook.clone() }
                    DetailField { label: "Instagram", value: user.socials.instagram.clone() }
                }
            }

            section {
                h3 { "Guarantor" }
                if user.guarantors.is_empty() {
                    p { class: "user-details-empty", "No guarantor on record" }
                }
                for (i, guarantor) in user.guarantors.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "user-details-grid",
                        DetailField { label: "Full Name", value: guarantor.full_name.clone() }
                        DetailField { label: "Phone Number", value: guarantor.phone_number.clone() }
                        DetailField { label: "Email Address", value: guarantor.email_address.clone() }
                        DetailField { label: "Relationship", value: guarantor.relationship.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn DetailField(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "user-details-field",
            span { class: "user-details-label", "{label}" }
            span { class: "user-details-value", "{value}" }
        }
    }
}
