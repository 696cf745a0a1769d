//! Error types for gridcalc core.
//!
//! Only failures outside cell evaluation live here. Evaluation failures are
//! in-band [`ErrorKind`](gridcalc_engine::engine::ErrorKind) values rendered
//! as `#…` codes in the output table, never `Err` results.

use thiserror::Error;

/// Errors that can occur while loading, saving, or managing a document.
#[derive(Error, Debug)]
pub enum GridcalcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No file path set")]
    NoFilePath,
}

pub type Result<T> = std::result::Result<T, GridcalcError>;
