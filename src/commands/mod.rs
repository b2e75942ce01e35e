//! Command implementations for the league administration CLI

pub mod player;
pub mod season;


use crate::error::Result;
use crate::storage::LeagueDatabase;
use std::path::Path;

/// Result of a command: one line, printed to stdout or error-styled to
/// stderr. Domain-level failures are rendered, never returned as `Err`, so
/// the process still exits 0 on those paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Line(String),
    Error(String),
}

impl Outcome {
    pub fn line(text: impl Into<String>) -> Self {
        Self::Line(text.into())
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::Error(text.into())
    }

    /// The message text regardless of styling.
    pub fn text(&self) -> &str {
        match self {
            Self::Line(text) | Self::Error(text) => text,
        }
    }

    pub fn print(&self) {
        match self {
            Self::Line(text) => println!("{text}"),
            Self::Error(text) => eprintln!("{text}"),
        }
    }
}

/// Open the database at `path`, or at the default location when absent.
pub fn open_database(path: Option<&Path>) -> Result<LeagueDatabase> {
    match path {
        Some(path) => LeagueDatabase::open(path),
        None => LeagueDatabase::new(),
    }
}
