use serde::{Deserialize, Serialize};

use userseed_core::Location;

/// Progress of a script run, reported after each user is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: u64,
    pub total: u64,
}

impl Progress {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.current as f64 / self.total as f64) * 100.0
    }
}

/// Summary of a generated script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptReport {
    pub user_count: u64,
    pub location_statements: u64,
    pub account_statements: u64,
    pub user_statements: u64,
    pub bytes_written: u64,
    /// Shared location referenced by every user row.
    pub location: Location,
}

impl ScriptReport {
    pub fn statements(&self) -> u64 {
        self.location_statements + self.account_statements + self.user_statements
    }
}
