use bevy::prelude::*;

use crate::ui::style::BOARD_BG;

#[derive(Component)]
pub struct GameCamera;

pub fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, GameCamera));
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BOARD_BG))
            .add_systems(Startup, setup_camera);
    }
}
