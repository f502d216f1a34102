use bevy::prelude::*;

use drop_match::{
    board::{
        BoardDef, CellDef, DragPayload, DropRequest, ItemDef, ItemId, MatchSession, MenuOrder,
        ReturnRequest, SeedDef, ValidateRequest,
    },
    grid::{CellRect, GridSettings},
};

pub fn icon_for(id: ItemId) -> String {
    format!("icons/item{id}.png")
}

/// Board with `n` items and `n` cells laid out in one row; cell `"c{i}"`
/// expects item `i`.
pub fn row_board(n: u32) -> BoardDef {
    let items = (1..=n)
        .map(|id| ItemDef {
            id,
            name: format!("Item {id}"),
            description: format!("Description of item {id}"),
            icon: icon_for(id),
        })
        .collect();
    let cells = (1..=n)
        .map(|id| CellDef {
            id: cell_name(id),
            target: id,
            rect: CellRect {
                x: (id - 1) * 2,
                y: 0,
                w: 2,
                h: 2,
            },
        })
        .collect();

    BoardDef {
        grid: GridSettings::default(),
        items,
        cells,
        menu_order: MenuOrder::Catalog,
        seeded: Vec::new(),
    }
}

pub fn cell_name(id: ItemId) -> String {
    format!("c{id}")
}

pub fn with_seed(mut board: BoardDef, cell: &str, item: ItemId) -> BoardDef {
    board.seeded.push(SeedDef {
        cell: cell.to_string(),
        item,
    });
    board
}

pub fn encoded_payload(id: ItemId) -> String {
    match DragPayload::new(id, icon_for(id)).encode() {
        Ok(encoded) => encoded,
        Err(err) => panic!("payload for item {id} failed to encode: {err}"),
    }
}

pub fn request_drop(app: &mut App, cell: &str, item: ItemId) {
    request_raw_drop(app, cell, &encoded_payload(item));
}

pub fn request_raw_drop(app: &mut App, cell: &str, payload: &str) {
    app.world_mut().write_message(DropRequest {
        cell_id: cell.to_string(),
        payload: payload.to_string(),
    });
}

pub fn request_return(app: &mut App, cell: &str) {
    app.world_mut().write_message(ReturnRequest {
        cell_id: cell.to_string(),
    });
}

pub fn request_validation(app: &mut App) {
    app.world_mut().write_message(ValidateRequest);
}

pub fn menu_ids(world: &World) -> Vec<ItemId> {
    world
        .resource::<MatchSession>()
        .menu()
        .iter()
        .map(|entry| entry.item_id)
        .collect()
}
