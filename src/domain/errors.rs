//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. Aggregation never fails;
//! only loading and the interactive surface can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// A data source could not be read.
    #[error("Data source error ({entity}): {message}")]
    Source {
        entity: &'static str,
        message: String,
    },

    #[error("Decode error ({entity}): {message}")]
    Decode {
        entity: &'static str,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("UI error: {0}")]
    Ui(String),
}
