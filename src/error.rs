//! Error types for the league administration CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Season not found: {name}")]
    SeasonNotFound { name: String },

    #[error("Name already exists: {name}")]
    DuplicateName { name: String },

    #[error("Name must not be empty")]
    EmptyName,

    #[error("Data directory error: {message}")]
    DataDir { message: String },

    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("System clock error: {0}")]
    SystemTime(#[from] std::time::SystemTimeError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl LeagueError {
    /// True when the underlying SQLite error is a UNIQUE constraint failure.
    pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
        matches!(
            err,
            rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error {
                    code: rusqlite::ffi::ErrorCode::ConstraintViolation,
                    ..
                },
                _,
            )
        )
    }
}
