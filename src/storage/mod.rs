//! Storage layer for the league administration CLI
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Entity structs
//! - `schema`: Database connection and schema management
//! - `store`: Repository traits consumed by the managers
//! - `queries`: SQLite implementation of the repository traits

pub mod models;
pub mod queries;
pub mod schema;
pub mod store;


// Re-export the main types and database struct for easy access
pub use models::{Player, Season};
pub use schema::LeagueDatabase;
pub use store::{PlayerStore, SeasonStore};
