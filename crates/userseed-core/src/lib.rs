//! Core contracts for userseed.
//!
//! This crate defines the synthetic record types written into seed scripts
//! and the validated user count shared by the generator and the CLI.

pub mod count;
pub mod error;
pub mod model;

pub use count::UserCount;
pub use error::CountError;
pub use model::{
    ACCOUNT_ROLE, AUTHENTICATION_CODE_PLACEHOLDER, Account, DateOfBirth, Location, LocationKey,
    PHONE_PREFIX, PhoneNumber, UserProfile,
};

/// Default file name for the generated SQL script.
pub const DEFAULT_SCRIPT_FILE: &str = "insertUsersScript.sql";

/// Default file name for the street address CSV.
pub const DEFAULT_ADDRESS_CSV: &str = "nz-street-address.csv";
