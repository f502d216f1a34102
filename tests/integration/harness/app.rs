use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use drop_match::{
    board::{install_board, BoardDef, BoardPlugin, MatchSession},
    configure_system_sets,
    grid::GridPlugin,
    invariants::InvariantPlugin,
};

fn base_app() -> App {
    let mut app = App::new();

    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);

    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / 60.0,
    )));

    configure_system_sets(&mut app);

    app.add_plugins((GridPlugin, BoardPlugin));
    app.add_plugins(InvariantPlugin);

    app
}

/// Headless app running `board`. Installed before Startup so the embedded
/// board is never loaded.
pub fn headless_app(board: &BoardDef) -> App {
    let mut app = base_app();
    if let Err(err) = install_board(app.world_mut(), board) {
        panic!("test board rejected: {err}");
    }
    app
}

/// Headless app that loads the board shipped with the game.
pub fn embedded_app() -> App {
    base_app()
}

/// Frames in which `MatchSession` was marked changed.
#[derive(Resource, Default)]
pub struct SessionChanges(pub u32);

fn count_session_changes(session: Res<MatchSession>, mut changes: ResMut<SessionChanges>) {
    if session.is_changed() {
        changes.0 += 1;
    }
}

pub fn track_session_changes(app: &mut App) {
    app.init_resource::<SessionChanges>().add_systems(
        PostUpdate,
        count_session_changes.run_if(resource_exists::<MatchSession>),
    );
}

pub fn reset_session_changes(app: &mut App) {
    app.world_mut().resource_mut::<SessionChanges>().0 = 0;
}

pub fn session_changes(app: &App) -> u32 {
    app.world().resource::<SessionChanges>().0
}
