// Library target exists for integration tests only; suppress library-API lints
// that don't apply to a game crate.
#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::implicit_hasher
)]

pub mod board;
pub mod camera;
pub mod constants;
pub mod grid;
pub mod ui;

#[cfg(debug_assertions)]
pub mod invariants;

use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GameplaySet {
    LayoutUpdate,
    BoardUpdate,
    UIUpdate,
}

pub fn configure_system_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            GameplaySet::LayoutUpdate,
            GameplaySet::BoardUpdate,
            GameplaySet::UIUpdate,
        )
            .chain(),
    );
}
