//! Error type shared by the registry, runner and CSV export.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("algorithm not found: {0}")]
    AlgorithmNotFound(String),

    #[error("variant '{variant}' failed verification: {detail}")]
    Verification { variant: String, detail: String },

    #[error("invalid run options: {0}")]
    InvalidOptions(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
