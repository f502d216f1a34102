use bevy::picking::Pickable;
use bevy::prelude::*;
use bevy::ui::Checked;
use bevy::window::PrimaryWindow;

use crate::{
    board::{CellId, DragPayload, DropRequest},
    constants::layout::{GRID_LEFT, GRID_TOP, ICON_SIZE},
    grid::BoardLayout,
    ui::{
        board_view::CellNode,
        icons::{icon_node, IconCache},
        style::{CELL_BORDER, CELL_TARGET_BORDER},
        UiMode,
    },
};

/// Stand-in for the platform drag payload: an encoded [`DragPayload`]
/// written at drag start and read back at drop time.
#[derive(Resource, Default, Debug)]
pub struct DragTransport {
    pub payload: Option<String>,
    pub source: Option<Entity>,
}

impl DragTransport {
    pub fn begin(&mut self, payload: String, source: Entity) {
        self.payload = Some(payload);
        self.source = Some(source);
    }

    pub fn clear(&mut self) {
        self.payload = None;
        self.source = None;
    }
}

#[derive(Component)]
pub struct DragGhost;

/// Cell under a cursor given in window coordinates.
pub fn drop_target(layout: &BoardLayout, cursor: Vec2) -> Option<CellId> {
    layout
        .cell_at(cursor - Vec2::new(GRID_LEFT, GRID_TOP))
        .cloned()
}

fn ghost_position(cursor: Vec2) -> (Val, Val) {
    (
        Val::Px(cursor.x - ICON_SIZE / 2.0),
        Val::Px(cursor.y - ICON_SIZE / 2.0),
    )
}

pub fn spawn_drag_ghost(
    mut commands: Commands,
    transport: Res<DragTransport>,
    asset_server: Res<AssetServer>,
    mut icons: ResMut<IconCache>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Some(raw) = transport.payload.as_deref() else {
        return;
    };
    let Ok(payload) = DragPayload::decode(raw) else {
        return;
    };
    let cursor = windows
        .single()
        .ok()
        .and_then(Window::cursor_position)
        .unwrap_or(Vec2::ZERO);

    let (image, mut node) = icon_node(icons.get_or_load(&asset_server, &payload.url), ICON_SIZE);
    let (left, top) = ghost_position(cursor);
    node.position_type = PositionType::Absolute;
    node.left = left;
    node.top = top;

    commands.spawn((
        image,
        node,
        GlobalZIndex(100),
        Pickable::IGNORE,
        DragGhost,
    ));
}

pub fn follow_cursor(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut ghosts: Query<&mut Node, With<DragGhost>>,
) {
    let Some(cursor) = windows.single().ok().and_then(Window::cursor_position) else {
        return;
    };
    let (left, top) = ghost_position(cursor);
    for mut node in &mut ghosts {
        node.left = left;
        node.top = top;
    }
}

pub fn highlight_drop_target(
    windows: Query<&Window, With<PrimaryWindow>>,
    layout: Res<BoardLayout>,
    mut cells: Query<(&CellNode, &mut BorderColor)>,
) {
    let target = windows
        .single()
        .ok()
        .and_then(Window::cursor_position)
        .and_then(|cursor| drop_target(&layout, cursor));

    for (cell, mut border) in &mut cells {
        let color = if target.as_deref() == Some(cell.cell_id.as_str()) {
            CELL_TARGET_BORDER
        } else {
            CELL_BORDER
        };
        border.set_all(color);
    }
}

/// Ends the drag when the button comes up, dropping on the cell under the
/// cursor if there is one.
pub fn finish_drag(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    layout: Res<BoardLayout>,
    transport: Res<DragTransport>,
    mut drops: MessageWriter<DropRequest>,
    mut next_mode: ResMut<NextState<UiMode>>,
) {
    // A press and release inside one frame never shows up as just_released here.
    if !mouse.just_released(MouseButton::Left) && mouse.pressed(MouseButton::Left) {
        return;
    }

    let target = windows
        .single()
        .ok()
        .and_then(Window::cursor_position)
        .and_then(|cursor| drop_target(&layout, cursor));

    match (target, transport.payload.clone()) {
        (Some(cell_id), Some(payload)) => {
            drops.write(DropRequest { cell_id, payload });
        }
        _ => debug!("Drag released outside the grid"),
    }
    next_mode.set(UiMode::Idle);
}

pub fn on_exit_dragging(
    mut commands: Commands,
    mut transport: ResMut<DragTransport>,
    ghosts: Query<Entity, With<DragGhost>>,
    mut cells: Query<&mut BorderColor, With<CellNode>>,
) {
    if let Some(source) = transport.source {
        if let Ok(mut entity) = commands.get_entity(source) {
            entity.remove::<Checked>();
        }
    }
    transport.clear();

    for entity in &ghosts {
        commands.entity(entity).despawn();
    }
    for mut border in &mut cells {
        border.set_all(CELL_BORDER);
    }
}
