//! League administration CLI library
//!
//! Administrative operations over a local SQLite league database: player
//! registration, season creation, season activation, and season listing.
//! The one system invariant is that at most one season is active at any
//! time; activation enforces it in a single storage transaction.
//!
//! Layering is command → manager → repository → storage, and control never
//! flows the other way:
//! - `cli`: clap argument definitions
//! - `commands`: one handler per subcommand, returning a printable [`commands::Outcome`]
//! - `manager`: use-case rules above raw storage access
//! - `storage`: rusqlite-backed entity persistence

pub mod cli;
pub mod commands;
pub mod error;
pub mod manager;
pub mod storage;

// Re-export commonly used types
pub use error::{LeagueError, Result};
pub use manager::{PlayerManager, SeasonManager};
pub use storage::{LeagueDatabase, Player, PlayerStore, Season, SeasonStore};
