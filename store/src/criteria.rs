//! # Filter criteria for the user list
//!
//! [`Criteria`] is a closed record of the filter fields the list view
//! recognizes, each optional. Keeping the set closed (rather than a dynamic
//! map) means a typo'd field name is a compile error, not a silently ignored
//! filter.
//!
//! ## Matching semantics
//!
//! - Blank or whitespace-only values do not participate.
//! - Text fields (`organization`, `username`, `email`, `phone_number`) match
//!   as case-insensitive substrings.
//! - `status` matches the record's effective status by exact,
//!   case-insensitive equality; a value that names no known status matches
//!   nothing.
//! - `date` compares the record's join timestamp, normalized to a calendar
//!   date, for exact equality.
//! - Supplied criteria are AND-combined. An empty criteria set passes the
//!   whole collection through, distinct from "filter matched nothing",
//!   which yields an empty result.

use chrono::NaiveDate;

use crate::models::{Status, User};

/// The active filter fields for a list view. All fields optional; empty
/// strings count as unset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Criteria {
    pub organization: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub date: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub status: Option<String>,
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl Criteria {
    /// Whether no criterion participates (identity filter).
    pub fn is_empty(&self) -> bool {
        active(&self.organization).is_none()
            && active(&self.username).is_none()
            && active(&self.email).is_none()
            && self.date.is_none()
            && active(&self.phone_number).is_none()
            && active(&self.status).is_none()
    }

    /// Whether a record satisfies every supplied criterion.
    pub fn matches(&self, user: &User) -> bool {
        if let Some(org) = active(&self.organization) {
            if !contains_ci(&user.organization, org) {
                return false;
            }
        }
        if let Some(name) = active(&self.username) {
            if !contains_ci(&user.user_name, name) {
                return false;
            }
        }
        if let Some(email) = active(&self.email) {
            if !contains_ci(&user.email_address, email) {
                return false;
            }
        }
        if let Some(date) = self.date {
            if user.date_joined.date_naive() != date {
                return false;
            }
        }
        if let Some(phone) = active(&self.phone_number) {
            if !contains_ci(&user.phone_number, phone) {
                return false;
            }
        }
        if let Some(status) = active(&self.status) {
            match Status::parse(status) {
                Some(wanted) => {
                    if user.effective_status() != wanted {
                        return false;
                    }
                }
                // Unknown status label matches nothing.
                None => return false,
            }
        }
        true
    }
}

/// Filter a collection by the supplied criteria.
pub fn apply(users: &[User], criteria: &Criteria) -> Vec<User> {
    if criteria.is_empty() {
        return users.to_vec();
    }
    users
        .iter()
        .filter(|u| criteria.matches(u))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::models::Status;

    #[test]
    fn empty_criteria_is_identity() {
        let users = fixtures::users(5);
        let filtered = apply(&users, &Criteria::default());
        let ids: Vec<u64> = filtered.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        // Blank strings count as unset too.
        let blank = Criteria {
            username: Some("   ".to_string()),
            email: Some(String::new()),
            ..Criteria::default()
        };
        assert!(blank.is_empty());
        assert_eq!(apply(&users, &blank).len(), 5);
    }

    #[test]
    fn text_fields_match_substrings_case_insensitively() {
        let users = fixtures::users(12);
        let criteria = Criteria {
            username: Some("USER1".to_string()),
            ..Criteria::default()
        };
        // user1, user10, user11, user12
        assert_eq!(apply(&users, &criteria).len(), 4);

        let criteria = Criteria {
            email: Some("user3@".to_string()),
            ..Criteria::default()
        };
        assert_eq!(apply(&users, &criteria).len(), 1);
    }

    #[test]
    fn status_matches_exactly_not_as_substring() {
        let mut users = fixtures::users(2);
        users[0].status = Some(Status::Active);
        users[1].status = Some(Status::Blacklisted);

        let criteria = Criteria {
            status: Some("active".to_string()),
            ..Criteria::default()
        };
        let filtered = apply(&users, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);

        // An implicit status counts as Active.
        let implicit = fixtures::users(1);
        assert_eq!(apply(&implicit, &criteria).len(), 1);

        // Unknown labels match nothing, rather than everything.
        let bogus = Criteria {
            status: Some("archived".to_string()),
            ..Criteria::default()
        };
        assert!(apply(&users, &bogus).is_empty());
    }

    #[test]
    fn date_matches_the_join_day() {
        let users = fixtures::users(3);
        let criteria = Criteria {
            date: NaiveDate::from_ymd_opt(2023, 4, 10),
            ..Criteria::default()
        };
        assert_eq!(apply(&users, &criteria).len(), 3);

        let criteria = Criteria {
            date: NaiveDate::from_ymd_opt(2023, 4, 11),
            ..Criteria::default()
        };
        assert!(apply(&users, &criteria).is_empty());
    }

    #[test]
    fn criteria_are_and_combined() {
        let mut users = fixtures::users(4);
        users[2].status = Some(Status::Blacklisted);

        let criteria = Criteria {
            organization: Some("lend".to_string()),
            status: Some("Blacklisted".to_string()),
            ..Criteria::default()
        };
        let filtered = apply(&users, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);

        // A non-matching second criterion empties the result: "matched
        // nothing" is a valid outcome distinct from "no filter".
        let criteria = Criteria {
            organization: Some("lend".to_string()),
            username: Some("nobody".to_string()),
            ..Criteria::default()
        };
        assert!(apply(&users, &criteria).is_empty());
    }
}
