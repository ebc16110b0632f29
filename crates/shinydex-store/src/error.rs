use thiserror::Error;

/// All the ways the persistence layer can go wrong.
///
/// Note that a malformed persisted record is deliberately NOT represented
/// here: the store recovers from it locally by treating the record as empty,
/// so corruption never surfaces as an error on the read path.
#[derive(Error, Debug)]
pub enum Error {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
