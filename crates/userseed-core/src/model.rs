use std::fmt;

use serde::{Deserialize, Serialize};

/// Role assigned to every generated account.
pub const ACCOUNT_ROLE: &str = "user";
/// Placeholder written in place of a real authentication code.
pub const AUTHENTICATION_CODE_PLACEHOLDER: &str = "authcode";
/// Literal prefix of every generated phone number.
pub const PHONE_PREFIX: &str = "027";

/// Address row shared by every user of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub street_number: u16,
    pub street_name: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub post_code: u32,
    pub district: String,
}

impl Location {
    /// Columns used by user rows to find this location.
    pub fn key(&self) -> LocationKey {
        LocationKey {
            street_number: self.street_number,
            street_name: self.street_name.clone(),
        }
    }
}

/// Street number and name pair that identifies the shared location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationKey {
    pub street_number: u16,
    pub street_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    pub role: String,
    pub authentication_code: String,
}

impl Account {
    /// Builds an account with the fixed role and placeholder code.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role: ACCOUNT_ROLE.to_string(),
            authentication_code: AUTHENTICATION_CODE_PLACEHOLDER.to_string(),
        }
    }
}

/// Personal fields of a user row. The account and location links are
/// resolved by the insert statement, not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub nickname: String,
    pub phone_number: PhoneNumber,
    pub date_of_birth: DateOfBirth,
    pub bio: String,
}

/// Date of birth as independent year, month and day parts.
///
/// No calendar validation happens here; generated days never exceed 28.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOfBirth {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Prefixes the local digits with [`PHONE_PREFIX`].
    pub fn from_local_digits(digits: u32) -> Self {
        Self(format!("{PHONE_PREFIX}{digits}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
