//! Fixture generation and SQL script emission for userseed.
//!
//! Fixtures are pure functions over an explicit random source, so a seeded
//! `ChaCha8Rng` reproduces a script byte for byte.

pub mod candidates;
pub mod engine;
pub mod errors;
pub mod fixtures;
pub mod model;
pub mod output;
pub mod pick;
pub mod sql;

pub use engine::{generate_script, write_script_file};
pub use errors::{GenerationError, PickError, SqlError};
pub use model::{Progress, ScriptReport};
pub use pick::{format_row, pick_address_row};
pub use sql::{SqlValue, Statement};
