//! # Domain models for customer records
//!
//! Defines the data structures returned by [`crate::Directory`] when resolving
//! or listing customer records. These types are `Serialize + Deserialize` so
//! they can cross the server/client boundary via Dioxus server functions and
//! round-trip through the browser's override store as JSON snapshots.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A single customer. Carries the immutable numeric `id`, profile and employment fields, the `dateJoined` timestamp, an optional mutable `status`, a nested [`Socials`] group, and an ordered list of [`Guarantor`]s. |
//! | [`Socials`] | The customer's social handles (twitter, facebook, instagram). |
//! | [`Guarantor`] | One guarantor sub-record: name, phone, email, relationship. |
//! | [`Status`] | The closed set of account states a record can be in. |
//!
//! A record with no explicit `status` in the source data is implicitly
//! Active; use [`User::effective_status`] rather than reading the field
//! directly. The field stays `Option` so the statistics layer can tell
//! explicit statuses apart from the implicit default.

use serde::{Deserialize, Serialize};

use chrono::{DateTime, Utc};

/// Account state of a customer record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Active,
    Inactive,
    Pending,
    Blacklisted,
}

impl Status {
    /// Display label, matching the capitalization of the source data.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
            Status::Pending => "Pending",
            Status::Blacklisted => "Blacklisted",
        }
    }

    /// Parse a status label case-insensitively.
    pub fn parse(s: &str) -> Option<Status> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Status::Active),
            "inactive" => Some(Status::Inactive),
            "pending" => Some(Status::Pending),
            "blacklisted" => Some(Status::Blacklisted),
            _ => None,
        }
    }

    /// All statuses, in display order. Used to populate filter dropdowns.
    pub fn all() -> [Status; 4] {
        [
            Status::Active,
            Status::Inactive,
            Status::Pending,
            Status::Blacklisted,
        ]
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Social handles attached to a customer record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Socials {
    pub twitter: String,
    pub facebook: String,
    pub instagram: String,
}

/// A guarantor attached to a customer record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guarantor {
    pub full_name: String,
    pub phone_number: String,
    pub email_address: String,
    pub relationship: String,
}

/// A single customer record.
///
/// Field names serialize as `camelCase` to match the remote JSON dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique numeric identifier. Immutable once assigned.
    pub id: u64,
    pub organization: String,
    pub user_name: String,
    pub full_name: String,
    pub phone_number: String,
    pub email_address: String,
    pub bvn: String,
    pub gender: String,
    pub marital_status: String,
    pub children: String,
    pub type_of_residence: String,
    pub education_level: String,
    pub employment_status: String,
    pub sector_of_employment: String,
    pub duration_of_employment: String,
    pub office_email: String,
    /// Display range, e.g. "₦200,000 - ₦400,000".
    pub monthly_income: String,
    pub loan_repayment: f64,
    pub date_joined: DateTime<Utc>,
    /// Absent in most source records; absent means implicitly Active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default)]
    pub socials: Socials,
    #[serde(default)]
    pub guarantors: Vec<Guarantor>,
}

impl User {
    /// The record's status, defaulting to [`Status::Active`] when the source
    /// data carries none.
    pub fn effective_status(&self) -> Status {
        self.status.unwrap_or_default()
    }

    /// A copy of this record with `status` replaced wholesale.
    pub fn with_status(&self, status: Status) -> User {
        User {
            status: Some(status),
            ..self.clone()
        }
    }

    /// The join timestamp formatted for table cells, e.g. "May 15, 2020 10:00 AM".
    pub fn date_joined_display(&self) -> String {
        self.date_joined.format("%b %d, %Y %I:%M %p").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(Status::parse("active"), Some(Status::Active));
        assert_eq!(Status::parse("BLACKLISTED"), Some(Status::Blacklisted));
        assert_eq!(Status::parse(" Pending "), Some(Status::Pending));
        assert_eq!(Status::parse("unknown"), None);
        assert_eq!(Status::parse(""), None);
    }

    #[test]
    fn status_defaults_to_active_when_absent() {
        let user = fixtures::user(1);
        assert!(user.status.is_none());
        assert_eq!(user.effective_status(), Status::Active);
    }

    #[test]
    fn user_json_round_trips() {
        let user = fixtures::user(7).with_status(Status::Pending);
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn user_deserializes_without_status_or_guarantors() {
        let json = r#"{
            "id": 3,
            "organization": "Lendview",
            "userName": "ada",
            "fullName": "Ada Obi",
            "phoneNumber": "08012345678",
            "emailAddress": "ada@lendview.io",
            "bvn": "22334455667",
            "gender": "Female",
            "maritalStatus": "Single",
            "children": "None",
            "typeOfResidence": "Apartment",
            "educationLevel": "B.Sc",
            "employmentStatus": "Employed",
            "sectorOfEmployment": "FinTech",
            "durationOfEmployment": "2 years",
            "officeEmail": "ada@work.io",
            "monthlyIncome": "₦200,000 - ₦400,000",
            "loanRepayment": 40000,
            "dateJoined": "2023-04-10T09:30:00Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 3);
        assert!(user.status.is_none());
        assert!(user.guarantors.is_empty());
        assert_eq!(user.socials, Socials::default());
    }
}
