//! Unit tests for the manager layer

use super::*;
use crate::error::LeagueError;
use crate::storage::LeagueDatabase;

fn player_manager() -> PlayerManager<LeagueDatabase> {
    PlayerManager::new(LeagueDatabase::new_in_memory().unwrap())
}

fn season_manager() -> SeasonManager<LeagueDatabase> {
    SeasonManager::new(LeagueDatabase::new_in_memory().unwrap())
}

#[test]
fn test_create_player_then_get() {
    let mut manager = player_manager();

    manager.create_player("alice").unwrap();
    let player = manager.get_player_by_name("alice").unwrap();
    assert_eq!(player.name, "alice");
}

#[test]
fn test_get_player_before_creation_fails() {
    let manager = player_manager();

    let err = manager.get_player_by_name("alice").unwrap_err();
    match err {
        LeagueError::PlayerNotFound { name } => assert_eq!(name, "alice"),
        other => panic!("Expected PlayerNotFound error, got {other:?}"),
    }
}

#[test]
fn test_create_player_empty_name_rejected() {
    let mut manager = player_manager();

    assert!(matches!(
        manager.create_player("").unwrap_err(),
        LeagueError::EmptyName
    ));
    assert!(matches!(
        manager.create_player("   ").unwrap_err(),
        LeagueError::EmptyName
    ));
}

#[test]
fn test_create_player_duplicate_surfaces_constraint() {
    let mut manager = player_manager();

    manager.create_player("alice").unwrap();
    let err = manager.create_player("alice").unwrap_err();
    assert!(matches!(err, LeagueError::DuplicateName { .. }));
}

#[test]
fn test_create_season_inactive() {
    let mut manager = season_manager();

    let season = manager.create_season("2024").unwrap();
    assert!(!season.active);
}

#[test]
fn test_get_season_before_creation_fails() {
    let manager = season_manager();

    let err = manager.get_season_by_name("2024").unwrap_err();
    assert!(matches!(err, LeagueError::SeasonNotFound { .. }));
}

#[test]
fn test_get_season_is_idempotent() {
    let mut manager = season_manager();

    manager.create_season("2024").unwrap();
    let first = manager.get_season_by_name("2024").unwrap();
    let second = manager.get_season_by_name("2024").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_activate_season_switch_over() {
    let mut manager = season_manager();

    let s2023 = manager.create_season("2023").unwrap();
    let s2024 = manager.create_season("2024").unwrap();

    manager.activate_season(&s2023).unwrap();
    assert!(manager.get_season_by_name("2023").unwrap().active);

    manager.activate_season(&s2024).unwrap();
    assert!(manager.get_season_by_name("2024").unwrap().active);
    assert!(!manager.get_season_by_name("2023").unwrap().active);
}

#[test]
fn test_activate_season_exactly_one_active() {
    let mut manager = season_manager();

    for name in ["2022", "2023", "2024"] {
        manager.create_season(name).unwrap();
    }
    let target = manager.get_season_by_name("2023").unwrap();
    manager.activate_season(&target).unwrap();

    let active: Vec<String> = manager
        .seasons()
        .unwrap()
        .into_iter()
        .filter(|s| s.active)
        .map(|s| s.name)
        .collect();
    assert_eq!(active, vec!["2023"]);
}

#[test]
fn test_seasons_insertion_order() {
    let mut manager = season_manager();

    manager.create_season("2024").unwrap();
    manager.create_season("2023").unwrap();

    let names: Vec<String> = manager
        .seasons()
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["2024", "2023"]);
}
