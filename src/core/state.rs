//! Core domain: top-level game state.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Controller tuning is being loaded.
    #[default]
    Boot,
    Playing,
}
