use bevy::picking::hover::Hovered;
use bevy::prelude::*;

use crate::{
    board::{cell_view, CellAction, CellId, CellView, MatchSession, ReturnRequest},
    constants::layout::{GRID_LEFT, GRID_TOP, ICON_SIZE},
    grid::{BoardLayout, PixelRect},
    ui::{
        icons::{icon_node, IconCache},
        style::{ButtonStyle, CANCEL_BG, CELL_BG, CELL_BORDER, TEXT_COLOR},
    },
};

#[derive(Component)]
pub struct GridView;

#[derive(Component)]
pub struct CellNode {
    pub cell_id: CellId,
}

#[derive(Component)]
pub struct ReturnButton {
    pub cell_id: CellId,
}

fn place_node(node: &mut Node, rect: PixelRect) {
    node.left = Val::Px(rect.left);
    node.top = Val::Px(rect.top);
    node.width = Val::Px(rect.width);
    node.height = Val::Px(rect.height);
}

pub fn setup_grid_view(mut commands: Commands, layout: Res<BoardLayout>) {
    let grid = commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(GRID_LEFT),
                top: Val::Px(GRID_TOP),
                width: Val::Px(layout.settings.width),
                height: Val::Px(layout.content_height()),
                ..default()
            },
            GridView,
        ))
        .id();

    for item in &layout.items {
        let mut node = Node {
            position_type: PositionType::Absolute,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: UiRect::all(Val::Px(6.0)),
            border: UiRect::all(Val::Px(2.0)),
            overflow: Overflow::clip(),
            ..default()
        };
        place_node(&mut node, layout.settings.to_pixels(item.rect));

        let cell = commands
            .spawn((
                node,
                BackgroundColor(CELL_BG),
                BorderColor::all(CELL_BORDER),
                CellNode {
                    cell_id: item.cell_id.clone(),
                },
            ))
            .id();
        commands.entity(grid).add_child(cell);
    }
}

pub fn sync_cell_positions(
    layout: Res<BoardLayout>,
    mut grids: Query<&mut Node, (With<GridView>, Without<CellNode>)>,
    mut cells: Query<(&CellNode, &mut Node), Without<GridView>>,
) {
    if !layout.is_changed() {
        return;
    }

    for mut node in &mut grids {
        node.height = Val::Px(layout.content_height());
    }
    for (cell, mut node) in &mut cells {
        if let Some(rect) = layout.pixel_rect(&cell.cell_id) {
            place_node(&mut node, rect);
        }
    }
}

/// Rebuilds every cell's children from its [`CellView`].
pub fn refresh_cell_content(
    mut commands: Commands,
    session: Res<MatchSession>,
    asset_server: Res<AssetServer>,
    mut icons: ResMut<IconCache>,
    cells: Query<(Entity, &CellNode)>,
) {
    if !session.is_changed() {
        return;
    }

    for (entity, cell) in &cells {
        let Some(view) = cell_view(&session, &cell.cell_id) else {
            continue;
        };

        commands.entity(entity).despawn_related::<Children>();
        match view {
            CellView::Hint { description } => {
                commands.entity(entity).with_children(|parent| {
                    parent.spawn((
                        Text::new(description),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ));
                });
            }
            CellView::Icon { icon, actions } => {
                let image = icons.get_or_load(&asset_server, &icon);
                commands.entity(entity).with_children(|parent| {
                    parent.spawn(icon_node(image, ICON_SIZE));
                    if actions.contains(&CellAction::Return) {
                        spawn_return_button(parent, &cell.cell_id);
                    }
                });
            }
        }
    }
}

fn spawn_return_button(parent: &mut ChildSpawnerCommands, cell_id: &str) {
    parent
        .spawn((
            Button,
            Node {
                margin: UiRect::top(Val::Px(6.0)),
                padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(CANCEL_BG),
            ButtonStyle::cancel(),
            Hovered::default(),
            ReturnButton {
                cell_id: cell_id.to_string(),
            },
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new("Return"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub fn handle_return_buttons(
    buttons: Query<(&ReturnButton, &Interaction), Changed<Interaction>>,
    mut requests: MessageWriter<ReturnRequest>,
) {
    for (button, interaction) in &buttons {
        if *interaction == Interaction::Pressed {
            requests.write(ReturnRequest {
                cell_id: button.cell_id.clone(),
            });
        }
    }
}
