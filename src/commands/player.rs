//! Player command implementations

use super::Outcome;
use crate::error::{LeagueError, Result};
use crate::manager::PlayerManager;
use crate::storage::LeagueDatabase;

/// Handle `player create <name>`.
///
/// Existence is pre-checked so the common duplicate path prints a domain
/// message instead of surfacing the storage constraint error.
pub fn create_player(db: LeagueDatabase, name: &str) -> Result<Outcome> {
    let mut manager = PlayerManager::new(db);

    match manager.get_player_by_name(name) {
        Ok(_) => Ok(Outcome::error(format!(
            "Player with name {name} already exists"
        ))),
        Err(LeagueError::PlayerNotFound { .. }) => {
            let player = manager.create_player(name)?;
            Ok(Outcome::line(format!(
                "Player with name {} created",
                player.name
            )))
        }
        Err(e) => Err(e),
    }
}
