//! Season command implementations

use super::Outcome;
use crate::error::{LeagueError, Result};
use crate::manager::SeasonManager;
use crate::storage::{LeagueDatabase, Season};

/// Handle `season create <name>`.
pub fn create_season(db: LeagueDatabase, name: &str) -> Result<Outcome> {
    let mut manager = SeasonManager::new(db);

    match manager.get_season_by_name(name) {
        Ok(_) => Ok(Outcome::error(format!("Season {name} already exists"))),
        Err(LeagueError::SeasonNotFound { .. }) => {
            let season = manager.create_season(name)?;
            Ok(Outcome::line(format!("Season {} created", season.name)))
        }
        Err(e) => Err(e),
    }
}

/// Handle `season activate <name>`.
pub fn activate_season(db: LeagueDatabase, name: &str) -> Result<Outcome> {
    let mut manager = SeasonManager::new(db);

    match manager.get_season_by_name(name) {
        Ok(season) => {
            let season = manager.activate_season(&season)?;
            Ok(Outcome::line(format!(
                "Season {} is active now",
                season.name
            )))
        }
        Err(LeagueError::SeasonNotFound { .. }) => Ok(Outcome::error(format!(
            "Season with name {name} doesn't exist"
        ))),
        Err(e) => Err(e),
    }
}

/// Handle `season list`.
pub fn list_seasons(db: LeagueDatabase, as_json: bool) -> Result<Outcome> {
    let manager = SeasonManager::new(db);
    let seasons = manager.seasons()?;

    if as_json {
        return Ok(Outcome::line(serde_json::to_string_pretty(&seasons)?));
    }

    Ok(Outcome::line(render_season_table(&seasons)))
}

/// Render the two-column `Name` / `Active` table.
pub(crate) fn render_season_table(seasons: &[Season]) -> String {
    let name_width = seasons
        .iter()
        .map(|s| s.name.len())
        .chain(std::iter::once("Name".len()))
        .max()
        .unwrap_or(0);

    let mut out = format!("{:<name_width$}  Active", "Name");
    for season in seasons {
        out.push('\n');
        out.push_str(&format!("{:<name_width$}  {}", season.name, season.active));
    }
    out
}
