use bevy::prelude::*;

use drop_match::{
    board::BoardPlugin, camera::CameraPlugin, configure_system_sets, grid::GridPlugin,
    ui::UIPlugin,
};

fn main() {
    let mut app = App::new();
    configure_system_sets(&mut app);
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Drag and Drop Game".to_string(),
            ..default()
        }),
        ..default()
    }))
    .add_plugins((GridPlugin, BoardPlugin, CameraPlugin, UIPlugin));

    #[cfg(debug_assertions)]
    app.add_plugins(drop_match::invariants::InvariantPlugin);

    app.run();
}
