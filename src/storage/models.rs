//! Entity models for the storage layer

use serde::{Deserialize, Serialize};

/// A registered player.
///
/// Players are immutable after creation; only the storage layer assigns ids
/// and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub created_at: u64,
    pub updated_at: u64,
}

/// A league season.
///
/// At most one season is active at any time; that invariant is maintained by
/// [`crate::storage::LeagueDatabase::activate_season`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub id: i64,
    pub name: String,
    pub active: bool,
    pub created_at: u64,
    pub updated_at: u64,
}
