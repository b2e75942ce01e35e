//! CLI argument definitions and parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "league-admin", about = "League administration CLI")]
pub struct LeagueAdmin {
    /// Database file path (defaults to the platform data directory).
    #[clap(long, global = true)]
    pub db_path: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage players
    Player {
        #[clap(subcommand)]
        cmd: PlayerCmd,
    },

    /// Manage seasons
    Season {
        #[clap(subcommand)]
        cmd: SeasonCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum PlayerCmd {
    /// Create a new player
    Create {
        /// Player name (unique)
        name: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum SeasonCmd {
    /// Create a new season (inactive)
    Create {
        /// Season name (unique)
        name: String,
    },

    /// Make the named season the single active season
    Activate {
        /// Season name
        name: String,
    },

    /// List all seasons
    List {
        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },
}
