//! Application-service layer above the repository traits
//!
//! Managers enforce the use-case rules: non-empty names, lookup-or-fail
//! semantics, and the season activation invariant.

pub mod player;
pub mod season;

#[cfg(test)]
mod tests;

pub use player::PlayerManager;
pub use season::SeasonManager;
