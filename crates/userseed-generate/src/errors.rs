use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while writing a seed script.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sql error: {0}")]
    Sql(#[from] SqlError),
}

/// Errors raised when rendering a parameterized statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    #[error("placeholder ${0} has no bound parameter")]
    MissingParam(usize),
    #[error("parameter {0} is never referenced")]
    UnusedParam(usize),
    #[error("malformed placeholder at byte {0}")]
    MalformedPlaceholder(usize),
}

/// Errors raised by the street address picker.
#[derive(Debug, Error)]
pub enum PickError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("no rows in {0}")]
    Empty(PathBuf),
}
