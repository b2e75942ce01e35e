//! SQLite implementation of the repository traits

use super::models::{Player, Season};
use super::schema::LeagueDatabase;
use super::store::{PlayerStore, SeasonStore};
use crate::error::{LeagueError, Result};
use rusqlite::{params, Row, Transaction};
use std::time::{SystemTime, UNIX_EPOCH};

/// Current time as epoch seconds, used for row timestamps.
fn now() -> Result<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}

fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
        updated_at: row.get(3)?,
    })
}

fn row_to_season(row: &Row) -> rusqlite::Result<Season> {
    Ok(Season {
        id: row.get(0)?,
        name: row.get(1)?,
        active: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

/// Map a UNIQUE constraint failure on `name` to a domain error.
fn map_insert_error(err: rusqlite::Error, name: &str) -> LeagueError {
    if LeagueError::is_unique_violation(&err) {
        LeagueError::DuplicateName {
            name: name.to_string(),
        }
    } else {
        err.into()
    }
}

impl PlayerStore for LeagueDatabase {
    fn find_player_by_name(&self, name: &str) -> Result<Option<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, created_at, updated_at FROM players WHERE name = ?",
        )?;

        match stmt.query_row(params![name], row_to_player) {
            Ok(player) => Ok(Some(player)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn insert_player(&mut self, name: &str) -> Result<Player> {
        let now = now()?;
        self.conn
            .execute(
                "INSERT INTO players (name, created_at, updated_at) VALUES (?, ?, ?)",
                params![name, now, now],
            )
            .map_err(|e| map_insert_error(e, name))?;

        Ok(Player {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        })
    }
}

impl SeasonStore for LeagueDatabase {
    fn find_season_by_name(&self, name: &str) -> Result<Option<Season>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, active, created_at, updated_at FROM seasons WHERE name = ?",
        )?;

        match stmt.query_row(params![name], row_to_season) {
            Ok(season) => Ok(Some(season)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn insert_season(&mut self, name: &str) -> Result<Season> {
        let now = now()?;
        self.conn
            .execute(
                "INSERT INTO seasons (name, active, created_at, updated_at)
                 VALUES (?, 0, ?, ?)",
                params![name, now, now],
            )
            .map_err(|e| map_insert_error(e, name))?;

        Ok(Season {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            active: false,
            created_at: now,
            updated_at: now,
        })
    }

    fn seasons(&self) -> Result<Vec<Season>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, active, created_at, updated_at FROM seasons ORDER BY id",
        )?;

        let rows = stmt.query_map([], row_to_season)?;

        let mut seasons = Vec::new();
        for row in rows {
            seasons.push(row?);
        }
        Ok(seasons)
    }

    /// Deactivate-all plus activate-target in one transaction, so concurrent
    /// activations can never leave zero or two active seasons behind.
    fn activate_season(&mut self, season: &Season) -> Result<Season> {
        let now = now()?;
        let tx = self.conn.transaction()?;

        deactivate_active_seasons(&tx, now)?;

        let updated = tx.execute(
            "UPDATE seasons SET active = 1, updated_at = ? WHERE id = ?",
            params![now, season.id],
        )?;
        if updated == 0 {
            return Err(LeagueError::SeasonNotFound {
                name: season.name.clone(),
            });
        }

        let activated = {
            let mut stmt = tx.prepare(
                "SELECT id, name, active, created_at, updated_at FROM seasons WHERE id = ?",
            )?;
            stmt.query_row(params![season.id], row_to_season)?
        };

        tx.commit()?;
        Ok(activated)
    }
}

/// Flip every currently-active season to inactive. Tolerates a corrupted
/// state with more than one active row.
fn deactivate_active_seasons(tx: &Transaction, now: u64) -> Result<()> {
    let active_ids: Vec<i64> = {
        let mut stmt = tx.prepare("SELECT id FROM seasons WHERE active = 1")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        rows.collect::<rusqlite::Result<_>>()?
    };

    for id in active_ids {
        tx.execute(
            "UPDATE seasons SET active = 0, updated_at = ? WHERE id = ?",
            params![now, id],
        )?;
    }

    Ok(())
}
