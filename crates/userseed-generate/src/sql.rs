//! Parameterized SQL statements rendered to literal script text.
//!
//! Statement text references values with `$1`, `$2`, ... placeholders.
//! Rendering substitutes each placeholder with a quoted literal, so values
//! never splice into the statement text unescaped.

use std::fmt;

use userseed_core::{Account, Location, LocationKey, UserProfile};

use crate::errors::SqlError;

/// A bound statement parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(String),
    Int(i64),
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Text(value) => write!(f, "'{}'", value.replace('\'', "''")),
            SqlValue::Int(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    sql: String,
    params: Vec<SqlValue>,
}

impl Statement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Binds the next positional parameter.
    pub fn bind(mut self, value: impl Into<SqlValue>) -> Self {
        self.params.push(value.into());
        self
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    /// Renders the statement with every placeholder replaced and a trailing
    /// semicolon. Every bound parameter must be referenced at least once.
    pub fn render(&self) -> Result<String, SqlError> {
        let mut rendered = String::with_capacity(self.sql.len() + 16 * self.params.len());
        let mut used = vec![false; self.params.len()];
        let bytes = self.sql.as_bytes();
        let mut start = 0;
        let mut pos = 0;

        while pos < bytes.len() {
            if bytes[pos] != b'$' {
                pos += 1;
                continue;
            }
            rendered.push_str(&self.sql[start..pos]);
            let digits_start = pos + 1;
            let mut digits_end = digits_start;
            while digits_end < bytes.len() && bytes[digits_end].is_ascii_digit() {
                digits_end += 1;
            }
            let index: usize = self.sql[digits_start..digits_end]
                .parse()
                .map_err(|_| SqlError::MalformedPlaceholder(pos))?;
            let value = index
                .checked_sub(1)
                .and_then(|slot| self.params.get(slot))
                .ok_or(SqlError::MissingParam(index))?;
            used[index - 1] = true;
            rendered.push_str(&value.to_string());
            pos = digits_end;
            start = digits_end;
        }
        rendered.push_str(&self.sql[start..]);

        if let Some(unused) = used.iter().position(|flag| !flag) {
            return Err(SqlError::UnusedParam(unused + 1));
        }

        rendered.push(';');
        Ok(rendered)
    }
}

/// Street number and post code are stored as strings, so they bind as text.
pub fn insert_location(location: &Location) -> Statement {
    Statement::new(
        "INSERT INTO location (street_number, street_name, city, region, country, post_code, district)\n\
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(location.street_number.to_string())
    .bind(location.street_name.as_str())
    .bind(location.city.as_str())
    .bind(location.region.as_str())
    .bind(location.country.as_str())
    .bind(location.post_code.to_string())
    .bind(location.district.as_str())
}

pub fn insert_account(account: &Account) -> Statement {
    Statement::new(
        "INSERT INTO account (email, role, authentication_code)\n\
         VALUES ($1, $2, $3)",
    )
    .bind(account.email.as_str())
    .bind(account.role.as_str())
    .bind(account.authentication_code.as_str())
}

/// Inserts a user by selecting the account id and location id that match
/// the given email and street. Both rows must appear earlier in the script.
pub fn insert_user(user: &UserProfile, account: &Account, location: &LocationKey) -> Statement {
    Statement::new(
        "INSERT INTO user (first_name, middle_name, last_name, nickname, ph_num, dob, bio, userid, address_id)\n\
         SELECT $1, $2, $3, $4, $5, $6, $7, account.userid, location.id\n\
         FROM account, location\n\
         WHERE account.email = $8 AND location.street_number = $9 AND location.street_name = $10",
    )
    .bind(user.first_name.as_str())
    .bind(user.middle_name.as_str())
    .bind(user.last_name.as_str())
    .bind(user.nickname.as_str())
    .bind(user.phone_number.as_str())
    .bind(user.date_of_birth.to_string())
    .bind(user.bio.as_str())
    .bind(account.email.as_str())
    .bind(location.street_number.to_string())
    .bind(location.street_name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_values_double_embedded_quotes() {
        let value = SqlValue::from("O'Brien");
        assert_eq!(value.to_string(), "'O''Brien'");
    }

    #[test]
    fn placeholders_above_nine_are_resolved() {
        let mut statement = Statement::new("SELECT $1, $10");
        for value in 1..=10_i64 {
            statement = statement.bind(value);
        }
        let err = statement.render().expect_err("parameters 2-9 are unused");
        assert_eq!(err, SqlError::UnusedParam(2));

        let statement = Statement::new("SELECT $2, $1").bind("a").bind(7_i64);
        assert_eq!(statement.render().expect("render"), "SELECT 7, 'a';");
    }

    #[test]
    fn missing_and_malformed_placeholders_fail() {
        let statement = Statement::new("SELECT $1, $2").bind("only");
        assert_eq!(statement.render(), Err(SqlError::MissingParam(2)));

        let statement = Statement::new("SELECT $0").bind("zero");
        assert_eq!(statement.render(), Err(SqlError::MissingParam(0)));

        let statement = Statement::new("SELECT $x");
        assert_eq!(statement.render(), Err(SqlError::MalformedPlaceholder(7)));
    }
}
