use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::{BoardDef, CellId};

/// Column/row geometry of the board, in the units the layout widget uses.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GridSettings {
    pub cols: u32,
    pub row_height: f32,
    pub width: f32,
    pub margin: (f32, f32),
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            cols: 12,
            row_height: 50.0,
            width: 1200.0,
            margin: (10.0, 10.0),
        }
    }
}

/// Cell rectangle in grid units: `x`/`w` are columns, `y`/`h` are rows.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl PixelRect {
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x < self.left + self.width
            && point.y >= self.top
            && point.y < self.top + self.height
    }
}

#[allow(clippy::cast_precision_loss)]
impl GridSettings {
    pub fn column_width(&self) -> f32 {
        let cols = self.cols.max(1) as f32;
        ((self.width - self.margin.0 * (cols + 1.0)) / cols).max(0.0)
    }

    pub fn to_pixels(&self, rect: CellRect) -> PixelRect {
        let col_width = self.column_width();
        let (margin_x, margin_y) = self.margin;

        PixelRect {
            left: margin_x + rect.x as f32 * (col_width + margin_x),
            top: margin_y + rect.y as f32 * (self.row_height + margin_y),
            width: col_width * rect.w as f32 + rect.w.saturating_sub(1) as f32 * margin_x,
            height: self.row_height * rect.h as f32 + rect.h.saturating_sub(1) as f32 * margin_y,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutItem {
    pub cell_id: CellId,
    pub rect: CellRect,
}

#[derive(Resource, Debug, Clone)]
pub struct BoardLayout {
    pub settings: GridSettings,
    pub items: Vec<LayoutItem>,
}

impl BoardLayout {
    pub fn new(settings: GridSettings, items: Vec<LayoutItem>) -> Self {
        Self { settings, items }
    }

    pub fn from_board(board: &BoardDef) -> Self {
        let items = board
            .cells
            .iter()
            .map(|cell| LayoutItem {
                cell_id: cell.id.clone(),
                rect: cell.rect,
            })
            .collect();
        Self::new(board.grid, items)
    }

    pub fn rect_for(&self, cell_id: &str) -> Option<CellRect> {
        self.items
            .iter()
            .find(|item| item.cell_id == cell_id)
            .map(|item| item.rect)
    }

    pub fn pixel_rect(&self, cell_id: &str) -> Option<PixelRect> {
        self.rect_for(cell_id)
            .map(|rect| self.settings.to_pixels(rect))
    }

    /// Cell under `point`, given in pixels relative to the grid's top-left corner.
    /// Later items win where rectangles overlap, matching paint order.
    pub fn cell_at(&self, point: Vec2) -> Option<&CellId> {
        self.items
            .iter()
            .rev()
            .find(|item| self.settings.to_pixels(item.rect).contains(point))
            .map(|item| &item.cell_id)
    }

    pub fn content_height(&self) -> f32 {
        self.items
            .iter()
            .map(|item| {
                let px = self.settings.to_pixels(item.rect);
                px.top + px.height
            })
            .fold(0.0, f32::max)
            + self.settings.margin.1
    }

    /// Replaces the rectangles of known cells. Unknown cell ids are skipped;
    /// the widget is not allowed to invent cells.
    pub fn apply_change(&mut self, changed: &[LayoutItem]) -> usize {
        let mut updated = 0;
        for change in changed {
            if let Some(item) = self
                .items
                .iter_mut()
                .find(|item| item.cell_id == change.cell_id)
            {
                if item.rect != change.rect {
                    item.rect = change.rect;
                    updated += 1;
                }
            }
        }
        updated
    }
}

/// Entry point for an external layout surface that repositions cells.
/// The game itself never writes it; cells stay where the board puts them.
#[derive(Message, Debug, Clone)]
pub struct LayoutChanged {
    pub items: Vec<LayoutItem>,
}

pub fn apply_layout_changes(
    mut changes: MessageReader<LayoutChanged>,
    mut layout: ResMut<BoardLayout>,
) {
    for change in changes.read() {
        let updated = layout.apply_change(&change.items);
        if updated > 0 {
            info!("Layout changed: {updated} cell(s) moved or resized");
        } else {
            debug!("Layout change ignored, no known cell differed");
        }
    }
}

pub struct GridPlugin;

impl Plugin for GridPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<LayoutChanged>().add_systems(
            Update,
            apply_layout_changes
                .run_if(resource_exists::<BoardLayout>)
                .in_set(crate::GameplaySet::LayoutUpdate),
        );
    }
}
