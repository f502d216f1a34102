use bevy::picking::hover::Hovered;
use bevy::prelude::*;

use crate::{
    board::{ValidateRequest, ValidationResult},
    constants::{
        layout::{GRID_LEFT, GRID_TOP, VALIDATE_GAP},
        timing::BANNER_SECONDS,
    },
    grid::BoardLayout,
    ui::style::{ButtonStyle, CONFIRM_BG, FAILURE_COLOR, SUCCESS_COLOR, TEXT_COLOR},
};

#[derive(Component)]
pub struct ValidateBar;

#[derive(Component)]
pub struct ValidateButton;

#[derive(Component)]
pub struct ResultBanner {
    pub timer: Timer,
}

fn bar_top(layout: &BoardLayout) -> f32 {
    GRID_TOP + layout.content_height() + VALIDATE_GAP
}

pub fn setup_validate_bar(mut commands: Commands, layout: Res<BoardLayout>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(GRID_LEFT),
                top: Val::Px(bar_top(&layout)),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(16.0),
                ..default()
            },
            ValidateBar,
        ))
        .with_children(|bar| {
            bar.spawn((
                Button,
                Node {
                    padding: UiRect::axes(Val::Px(18.0), Val::Px(8.0)),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                BackgroundColor(CONFIRM_BG),
                ButtonStyle::confirm(),
                Hovered::default(),
                ValidateButton,
            ))
            .with_children(|btn| {
                btn.spawn((
                    Text::new("Validate"),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(TEXT_COLOR),
                ));
            });
        });
}

pub fn follow_layout(layout: Res<BoardLayout>, mut bars: Query<&mut Node, With<ValidateBar>>) {
    if !layout.is_changed() {
        return;
    }
    for mut node in &mut bars {
        node.top = Val::Px(bar_top(&layout));
    }
}

pub fn handle_validate_button(
    buttons: Query<&Interaction, (Changed<Interaction>, With<ValidateButton>)>,
    mut requests: MessageWriter<ValidateRequest>,
) {
    for interaction in &buttons {
        if *interaction == Interaction::Pressed {
            requests.write(ValidateRequest);
        }
    }
}

pub fn display_validation_result(
    mut commands: Commands,
    mut results: MessageReader<ValidationResult>,
    bars: Query<Entity, With<ValidateBar>>,
    banners: Query<Entity, With<ResultBanner>>,
) {
    let Some(result) = results.read().last() else {
        return;
    };
    let Ok(bar) = bars.single() else {
        return;
    };

    for entity in &banners {
        commands.entity(entity).despawn();
    }

    let report = &result.report;
    let color = if report.is_success() {
        SUCCESS_COLOR
    } else {
        FAILURE_COLOR
    };
    let banner = commands
        .spawn((
            ResultBanner {
                timer: Timer::from_seconds(BANNER_SECONDS, TimerMode::Once),
            },
            Text::new(format!(
                "{} ({}/{})",
                report.message(),
                report.correct_count(),
                report.total()
            )),
            TextFont {
                font_size: 18.0,
                ..default()
            },
            TextColor(color),
        ))
        .id();
    commands.entity(bar).add_child(banner);
}

pub fn cleanup_result_banners(
    mut commands: Commands,
    time: Res<Time>,
    mut banners: Query<(Entity, &mut ResultBanner)>,
) {
    for (entity, mut banner) in &mut banners {
        banner.timer.tick(time.delta());
        if banner.timer.is_finished() {
            commands.entity(entity).despawn();
        }
    }
}
