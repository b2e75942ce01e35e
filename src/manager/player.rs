//! Player use-case operations

use crate::error::{LeagueError, Result};
use crate::storage::{Player, PlayerStore};

/// Application service for player operations.
pub struct PlayerManager<S> {
    store: S,
}

impl<S: PlayerStore> PlayerManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create and persist a new player.
    ///
    /// Does not pre-check for duplicates; a name clash surfaces as
    /// [`LeagueError::DuplicateName`] from the storage constraint.
    pub fn create_player(&mut self, name: &str) -> Result<Player> {
        if name.trim().is_empty() {
            return Err(LeagueError::EmptyName);
        }
        self.store.insert_player(name)
    }

    /// Exact-name lookup, failing with [`LeagueError::PlayerNotFound`].
    pub fn get_player_by_name(&self, name: &str) -> Result<Player> {
        self.store
            .find_player_by_name(name)?
            .ok_or_else(|| LeagueError::PlayerNotFound {
                name: name.to_string(),
            })
    }
}
