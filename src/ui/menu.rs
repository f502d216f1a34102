use bevy::picking::hover::Hovered;
use bevy::prelude::*;
use bevy::ui::Checked;

use crate::{
    board::{DragPayload, ItemId, MatchSession, MenuEntry},
    constants::layout::{GRID_LEFT, ICON_SIZE, MENU_HEIGHT, MENU_TOP},
    ui::{
        drag::DragTransport,
        icons::{icon_node, IconCache},
        style::{ButtonStyle, BUTTON_BG, DIM_TEXT, PANEL_BG, PANEL_BORDER},
        UiMode,
    },
};

#[derive(Component)]
pub struct MenuBar;

#[derive(Component)]
pub struct MenuIconButton {
    pub item_id: ItemId,
    pub icon: String,
}

impl MenuIconButton {
    pub fn new(entry: &MenuEntry) -> Self {
        Self {
            item_id: entry.item_id,
            icon: entry.icon.clone(),
        }
    }
}

pub fn setup_menu_bar(mut commands: Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(MENU_TOP),
            left: Val::Px(GRID_LEFT),
            right: Val::Px(GRID_LEFT),
            height: Val::Px(MENU_HEIGHT),
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(8.0),
            padding: UiRect::horizontal(Val::Px(8.0)),
            border: UiRect::all(Val::Px(1.0)),
            ..default()
        },
        BackgroundColor(PANEL_BG),
        BorderColor::all(PANEL_BORDER),
        MenuBar,
    ));
}

/// Respawns the menu icons whenever the session changes.
pub fn rebuild_menu(
    mut commands: Commands,
    session: Res<MatchSession>,
    asset_server: Res<AssetServer>,
    mut icons: ResMut<IconCache>,
    bar_query: Query<Entity, With<MenuBar>>,
) {
    if !session.is_changed() {
        return;
    }
    let Ok(bar) = bar_query.single() else {
        return;
    };

    commands.entity(bar).despawn_related::<Children>();
    commands.entity(bar).with_children(|parent| {
        for entry in session.menu() {
            let name = session
                .catalog()
                .get(entry.item_id)
                .map(|item| item.name.clone())
                .unwrap_or_default();
            let image = icons.get_or_load(&asset_server, &entry.icon);
            spawn_menu_icon(parent, entry, name, image);
        }
    });
}

fn spawn_menu_icon(
    parent: &mut ChildSpawnerCommands,
    entry: &MenuEntry,
    name: String,
    image: Handle<Image>,
) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(ICON_SIZE + 24.0),
                height: Val::Px(MENU_HEIGHT - 10.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(BUTTON_BG),
            BorderColor::all(PANEL_BORDER),
            ButtonStyle::menu_icon(),
            Hovered::default(),
            MenuIconButton::new(entry),
        ))
        .with_children(|btn| {
            btn.spawn(icon_node(image, ICON_SIZE - 8.0));
            btn.spawn((
                Text::new(name),
                TextFont {
                    font_size: 9.0,
                    ..default()
                },
                TextColor(DIM_TEXT),
            ));
        });
}

/// Pressing a menu icon starts a drag carrying its encoded payload.
pub fn start_drag(
    mut commands: Commands,
    buttons: Query<(Entity, &MenuIconButton, &Interaction), Changed<Interaction>>,
    mut transport: ResMut<DragTransport>,
    mut next_mode: ResMut<NextState<UiMode>>,
) {
    for (entity, button, interaction) in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }

        let payload = DragPayload::new(button.item_id, button.icon.clone());
        match payload.encode() {
            Ok(encoded) => {
                transport.begin(encoded, entity);
                commands.entity(entity).insert(Checked);
                next_mode.set(UiMode::Dragging);
                debug!("Drag started for item {}", button.item_id);
            }
            Err(err) => warn!("Drag of item {} not started: {err}", button.item_id),
        }
        break;
    }
}
