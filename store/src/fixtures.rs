//! Test fixtures shared by the store's unit tests.

use chrono::{TimeZone, Utc};

use crate::models::{Guarantor, Socials, User};

/// A fully populated record with no explicit status.
pub(crate) fn user(id: u64) -> User {
    User {
        id,
        organization: "Lendview".to_string(),
        user_name: format!("user{id}"),
        full_name: format!("Test User {id}"),
        phone_number: format!("080000000{id:02}"),
        email_address: format!("user{id}@lendview.io"),
        bvn: "12345678901".to_string(),
        gender: "Female".to_string(),
        marital_status: "Single".to_string(),
        children: "None".to_string(),
        type_of_residence: "Apartment".to_string(),
        education_level: "B.Sc".to_string(),
        employment_status: "Employed".to_string(),
        sector_of_employment: "FinTech".to_string(),
        duration_of_employment: "2 years".to_string(),
        office_email: format!("user{id}@work.io"),
        monthly_income: "₦200,000 - ₦400,000".to_string(),
        loan_repayment: 40000.0,
        date_joined: Utc.with_ymd_and_hms(2023, 4, 10, 9, 30, 0).unwrap(),
        status: None,
        socials: Socials {
            twitter: format!("@user{id}"),
            facebook: format!("user{id}"),
            instagram: format!("@user{id}"),
        },
        guarantors: vec![Guarantor {
            full_name: "Debby Ogana".to_string(),
            phone_number: "07060780922".to_string(),
            email_address: "debby@gmail.com".to_string(),
            relationship: "Sister".to_string(),
        }],
    }
}

/// A contiguous block of records with ids `1..=count`.
pub(crate) fn users(count: u64) -> Vec<User> {
    (1..=count).map(user).collect()
}
