//! Error types for the fallible edges of the crate: scenario files,
//! element databases and snapshots. The physics core itself never fails.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Scenario TOML did not parse
    #[error("Scenario parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Element database JSON did not parse
    #[error("Element database error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot could not be encoded or decoded
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    /// A scenario referenced an element the table does not know
    #[error("Unknown element: {0}")]
    UnknownElement(String),
}

pub type Result<T> = std::result::Result<T, Error>;
