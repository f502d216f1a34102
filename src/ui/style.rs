use bevy::{picking::hover::Hovered, prelude::*, ui::Checked, ui::Pressed};

use crate::ui::UISystemSet;

pub const BOARD_BG: Color = Color::srgb(0.08, 0.08, 0.11);
pub const PANEL_BG: Color = Color::srgba(0.1, 0.1, 0.15, 0.9);
pub const PANEL_BORDER: Color = Color::srgb(0.3, 0.4, 0.6);

pub const CELL_BG: Color = Color::srgba(0.15, 0.15, 0.2, 0.8);
pub const CELL_BORDER: Color = Color::srgb(0.25, 0.3, 0.45);
pub const CELL_TARGET_BORDER: Color = Color::srgb(0.95, 0.75, 0.3);

pub const HEADER_COLOR: Color = Color::srgb(0.85, 0.85, 0.95);
pub const TEXT_COLOR: Color = Color::srgb(0.8, 0.8, 0.8);
pub const DIM_TEXT: Color = Color::srgb(0.5, 0.5, 0.5);

pub const BUTTON_BG: Color = Color::srgb(0.2, 0.2, 0.3);
pub const BUTTON_HOVER: Color = Color::srgb(0.3, 0.3, 0.45);

pub const CONFIRM_BG: Color = Color::srgb(0.15, 0.35, 0.15);
pub const CONFIRM_HOVER: Color = Color::srgb(0.2, 0.5, 0.2);

pub const CANCEL_BG: Color = Color::srgb(0.91, 0.3, 0.24);
pub const CANCEL_HOVER: Color = Color::srgb(0.75, 0.22, 0.17);

pub const SELECTED_BG: Color = Color::srgb(0.15, 0.25, 0.35);
pub const SELECTED_BORDER: Color = Color::srgb(0.3, 0.5, 0.7);

pub const SUCCESS_COLOR: Color = Color::srgb(0.4, 0.9, 0.4);
pub const FAILURE_COLOR: Color = Color::srgb(1.0, 0.4, 0.35);

/// Colors a button takes in each interaction state. Borders are only
/// touched when a border color is configured.
#[derive(Component, Clone, Debug)]
pub struct ButtonStyle {
    pub idle: Color,
    pub hovered: Color,
    pub border: Option<Color>,
    /// Background and border while the button is [`Checked`].
    pub checked: Option<(Color, Color)>,
}

impl ButtonStyle {
    #[must_use]
    pub fn new(idle: Color, hovered: Color) -> Self {
        Self {
            idle,
            hovered,
            border: None,
            checked: None,
        }
    }

    #[must_use]
    pub fn with_border(mut self, border: Color) -> Self {
        self.border = Some(border);
        self
    }

    #[must_use]
    pub fn with_checked(mut self, bg: Color, border: Color) -> Self {
        self.checked = Some((bg, border));
        self
    }

    #[must_use]
    pub fn confirm() -> Self {
        Self::new(CONFIRM_BG, CONFIRM_HOVER)
    }

    #[must_use]
    pub fn cancel() -> Self {
        Self::new(CANCEL_BG, CANCEL_HOVER)
    }

    /// Menu icons stay highlighted while their item is being dragged.
    #[must_use]
    pub fn menu_icon() -> Self {
        Self::new(BUTTON_BG, BUTTON_HOVER)
            .with_border(PANEL_BORDER)
            .with_checked(SELECTED_BG, SELECTED_BORDER)
    }

    /// Background and optional border for the given state.
    pub fn resolve(&self, hot: bool, checked: bool) -> (Color, Option<Color>) {
        match (checked, self.checked) {
            (true, Some((bg, border))) => (bg, Some(border)),
            (true, None) => (self.idle, self.border),
            (false, _) if hot => (self.hovered, self.border),
            (false, _) => (self.idle, self.border),
        }
    }
}

type StyledButton<'a> = (
    &'a ButtonStyle,
    &'a mut BackgroundColor,
    Option<&'a mut BorderColor>,
    Has<Pressed>,
    &'a Hovered,
    Has<Checked>,
);

fn paint(
    style: &ButtonStyle,
    bg: &mut BackgroundColor,
    border: Option<Mut<BorderColor>>,
    hot: bool,
    checked: bool,
) {
    let (bg_color, border_color) = style.resolve(hot, checked);
    bg.0 = bg_color;
    if let (Some(mut border), Some(color)) = (border, border_color) {
        border.set_all(color);
    }
}

pub fn apply_button_styles(
    mut buttons: Query<
        StyledButton,
        Or<(Changed<Pressed>, Changed<Hovered>, Added<Checked>)>,
    >,
) {
    for (style, mut bg, border, pressed, hovered, checked) in &mut buttons {
        paint(style, &mut bg, border, pressed || hovered.0, checked);
    }
}

/// Removals don't trip change filters, so repaint those buttons here.
pub fn repaint_on_release(
    mut buttons: Query<StyledButton>,
    mut removed_checked: RemovedComponents<Checked>,
    mut removed_pressed: RemovedComponents<Pressed>,
) {
    for entity in removed_checked.read().chain(removed_pressed.read()) {
        if let Ok((style, mut bg, border, pressed, hovered, checked)) = buttons.get_mut(entity) {
            paint(style, &mut bg, border, pressed || hovered.0, checked);
        }
    }
}

pub struct StylePlugin;

impl Plugin for StylePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (apply_button_styles, repaint_on_release).in_set(UISystemSet::VisualUpdates),
        );
    }
}
