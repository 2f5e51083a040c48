//! Aggregate statistics for the summary cards.
//!
//! Derived from the *unfiltered* collection; applying a filter narrows the
//! table, never the cards.

use crate::models::{Status, User};

/// Counts shown on the summary cards above the user list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_users: usize,
    pub active_users: usize,
    /// Records with a positive loan repayment figure.
    pub users_with_loans: usize,
}

/// Summarize the full collection.
///
/// `active_users` counts records with an *explicit* Active status. When no
/// record in the dataset carries an explicit status at all, it falls back to
/// 60% of the total.
// TODO: drop the 60% fallback once the upstream dataset ships explicit
// statuses for every record.
pub fn summarize(users: &[User]) -> Summary {
    let total_users = users.len();
    let explicit = users.iter().filter(|u| u.status.is_some()).count();

    let active_users = if explicit == 0 {
        total_users * 3 / 5
    } else {
        users
            .iter()
            .filter(|u| u.status == Some(Status::Active))
            .count()
    };

    let users_with_loans = users.iter().filter(|u| u.loan_repayment > 0.0).count();

    Summary {
        total_users,
        active_users,
        users_with_loans,
    }
}
