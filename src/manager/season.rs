//! Season use-case operations

use crate::error::{LeagueError, Result};
use crate::storage::{Season, SeasonStore};

/// Application service for season operations.
pub struct SeasonManager<S> {
    store: S,
}

impl<S: SeasonStore> SeasonManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create and persist a new season with `active = false`.
    pub fn create_season(&mut self, name: &str) -> Result<Season> {
        if name.trim().is_empty() {
            return Err(LeagueError::EmptyName);
        }
        self.store.insert_season(name)
    }

    /// Exact-name lookup, failing with [`LeagueError::SeasonNotFound`].
    pub fn get_season_by_name(&self, name: &str) -> Result<Season> {
        self.store
            .find_season_by_name(name)?
            .ok_or_else(|| LeagueError::SeasonNotFound {
                name: name.to_string(),
            })
    }

    /// All seasons in insertion order.
    pub fn seasons(&self) -> Result<Vec<Season>> {
        self.store.seasons()
    }

    /// Make `season` the single active season.
    ///
    /// Every currently-active season is deactivated and the target activated
    /// in one storage transaction, so the at-most-one-active invariant holds
    /// even against concurrent activation attempts.
    pub fn activate_season(&mut self, season: &Season) -> Result<Season> {
        self.store.activate_season(season)
    }
}
