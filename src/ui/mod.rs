use bevy::input_focus::InputDispatchPlugin;
use bevy::prelude::*;
use bevy::ui_widgets::UiWidgetsPlugins;

pub mod board_view;
pub mod drag;
pub mod icons;
pub mod menu;
pub mod style;
pub mod validate;

use crate::{
    board::{DragPayload, MatchSession},
    constants::layout::{GRID_LEFT, TITLE_TOP},
    grid::BoardLayout,
};
use drag::DragTransport;
use style::{StylePlugin, DIM_TEXT, HEADER_COLOR};

#[derive(States, Debug, Default, Hash, PartialEq, Eq, Clone)]
pub enum UiMode {
    #[default]
    Idle,
    Dragging,
}

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum UISystemSet {
    InputDetection,
    EntityManagement,
    VisualUpdates,
    LayoutUpdates,
}

pub fn configure_ui_system_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            UISystemSet::InputDetection,
            UISystemSet::EntityManagement,
            UISystemSet::VisualUpdates,
            UISystemSet::LayoutUpdates,
        )
            .chain()
            .in_set(crate::GameplaySet::UIUpdate),
    );
}

fn handle_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_mode: Res<State<UiMode>>,
    mut next_mode: ResMut<NextState<UiMode>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) && *current_mode.get() == UiMode::Dragging {
        debug!("Drag cancelled");
        next_mode.set(UiMode::Idle);
    }
}

fn setup_title(mut commands: Commands) {
    commands.spawn((
        Text::new("Drag and Drop Game"),
        TextFont {
            font_size: 26.0,
            ..default()
        },
        TextColor(HEADER_COLOR),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(TITLE_TOP),
            left: Val::Px(GRID_LEFT),
            ..default()
        },
    ));
}

/// Bottom-of-screen hint naming the item being dragged.
#[derive(Component)]
struct DragStatus;

fn setup_drag_status(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(DIM_TEXT),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(8.0),
            left: Val::Px(GRID_LEFT),
            ..default()
        },
        Visibility::Hidden,
        DragStatus,
    ));
}

fn dragged_item_name(transport: &DragTransport, session: &MatchSession) -> Option<String> {
    let payload = DragPayload::decode(transport.payload.as_deref()?).ok()?;
    session
        .catalog()
        .get(payload.id)
        .map(|item| item.name.clone())
}

fn update_drag_status(
    current_mode: Res<State<UiMode>>,
    transport: Res<DragTransport>,
    session: Res<MatchSession>,
    mut status: Query<(&mut Text, &mut Visibility), With<DragStatus>>,
) {
    if !current_mode.is_changed() && !transport.is_changed() {
        return;
    }

    for (mut text, mut visibility) in &mut status {
        match (current_mode.get(), dragged_item_name(&transport, &session)) {
            (UiMode::Dragging, Some(name)) => {
                **text = format!("Dragging {name}. Release over a cell, Esc to cancel.");
                *visibility = Visibility::Inherited;
            }
            _ => *visibility = Visibility::Hidden,
        }
    }
}

pub struct UIPlugin;
impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        configure_ui_system_sets(app);

        app.init_state::<UiMode>().init_resource::<DragTransport>();

        app.add_systems(
            PostStartup,
            (
                setup_title,
                setup_drag_status,
                menu::setup_menu_bar,
                board_view::setup_grid_view,
                validate::setup_validate_bar,
            )
                .run_if(resource_exists::<BoardLayout>),
        );

        app.add_systems(
            Update,
            (
                (
                    handle_escape,
                    menu::start_drag.run_if(in_state(UiMode::Idle)),
                    drag::finish_drag.run_if(in_state(UiMode::Dragging)),
                    board_view::handle_return_buttons.run_if(in_state(UiMode::Idle)),
                    validate::handle_validate_button,
                )
                    .in_set(UISystemSet::InputDetection),
                (
                    menu::rebuild_menu,
                    board_view::refresh_cell_content,
                    validate::display_validation_result,
                    validate::cleanup_result_banners,
                )
                    .in_set(UISystemSet::EntityManagement),
                (
                    update_drag_status,
                    drag::follow_cursor.run_if(in_state(UiMode::Dragging)),
                    drag::highlight_drop_target.run_if(in_state(UiMode::Dragging)),
                )
                    .in_set(UISystemSet::VisualUpdates),
                (board_view::sync_cell_positions, validate::follow_layout)
                    .in_set(UISystemSet::LayoutUpdates),
            )
                .run_if(resource_exists::<MatchSession>),
        );

        app.add_systems(OnEnter(UiMode::Dragging), drag::spawn_drag_ghost);
        app.add_systems(OnExit(UiMode::Dragging), drag::on_exit_dragging);

        app.add_plugins((
            InputDispatchPlugin,
            UiWidgetsPlugins,
            StylePlugin,
            icons::IconPlugin,
        ));
    }
}
