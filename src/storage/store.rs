//! Repository traits consumed by the manager layer.
//!
//! One concrete implementation exists ([`super::LeagueDatabase`]); the traits
//! keep the managers decoupled from the SQLite backing store.

use super::models::{Player, Season};
use crate::error::Result;

/// Typed data access for players.
pub trait PlayerStore {
    /// Exact-name lookup. Absence is `None`, not an error.
    fn find_player_by_name(&self, name: &str) -> Result<Option<Player>>;

    /// Insert a new player and return the stored row.
    fn insert_player(&mut self, name: &str) -> Result<Player>;
}

/// Typed data access for seasons.
pub trait SeasonStore {
    /// Exact-name lookup. Absence is `None`, not an error.
    fn find_season_by_name(&self, name: &str) -> Result<Option<Season>>;

    /// Insert a new season with `active = false` and return the stored row.
    fn insert_season(&mut self, name: &str) -> Result<Season>;

    /// All seasons in insertion order.
    fn seasons(&self) -> Result<Vec<Season>>;

    /// Atomically deactivate every active season and activate the target.
    fn activate_season(&mut self, season: &Season) -> Result<Season>;
}
