use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Free-form profile attributes the platform stores alongside the account.
/// Only the fields the dashboard displays are decoded; anything else is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAttrs {
    #[serde(rename = "addressCity", default)]
    pub address_city: Option<String>,

    #[serde(rename = "addressCountry", default)]
    pub address_country: Option<String>,

    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: Option<DateTime<Utc>>,
}

/// The authenticated user's profile, combined with the aggregate XP sum
/// from the transactions aggregate query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub campus: String,
    pub attrs: UserAttrs,

    /// Server-computed audit ratio
    pub audit_ratio: f64,

    /// Total audit points earned (type `up`)
    pub total_up: i64,

    /// Total audit points received (type `down`)
    pub total_down: i64,

    /// Aggregate XP sum under the configured path prefix
    pub total_xp: i64,
}

impl UserProfile {
    /// Age in whole years derived from the date-of-birth attribute,
    /// or `None` when the profile doesn't carry one.
    #[must_use]
    pub fn age(&self, today: NaiveDate) -> Option<i32> {
        let dob = self.attrs.date_of_birth?.date_naive();
        let mut age = today.year() - dob.year();
        if (today.month(), today.day()) < (dob.month(), dob.day()) {
            age -= 1;
        }
        Some(age)
    }
}
