use bevy::prelude::*;

pub fn tick(app: &mut App) {
    app.update();
}

pub fn tick_n(app: &mut App, n: u32) {
    for _ in 0..n {
        app.update();
    }
}
