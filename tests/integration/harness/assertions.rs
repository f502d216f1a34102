use bevy::prelude::*;

use drop_match::board::{ItemId, LastValidation, MatchSession, ValidationReport};

pub fn assert_in_menu(world: &World, item: ItemId) {
    let session = world.resource::<MatchSession>();
    assert!(
        session.in_menu(item),
        "item {item} expected in menu, found at {:?}",
        session.locate(item)
    );
}

pub fn assert_not_in_menu(world: &World, item: ItemId) {
    let session = world.resource::<MatchSession>();
    assert!(!session.in_menu(item), "item {item} still in menu");
}

pub fn assert_cell_holds(world: &World, cell: &str, item: ItemId) {
    let session = world.resource::<MatchSession>();
    let Some(found) = session.cell(cell) else {
        panic!("cell '{cell}' does not exist");
    };
    assert_eq!(
        found.placed_item(),
        Some(item),
        "cell '{cell}': expected item {item}, found {:?}",
        found.placed_item()
    );
}

pub fn assert_cell_empty(world: &World, cell: &str) {
    let session = world.resource::<MatchSession>();
    let Some(found) = session.cell(cell) else {
        panic!("cell '{cell}' does not exist");
    };
    assert!(
        found.is_empty(),
        "cell '{cell}' expected empty, holds {:?}",
        found.placed_item()
    );
}

/// Every catalog item sits in exactly one place.
pub fn assert_invariants(world: &World) {
    let session = world.resource::<MatchSession>();
    if let Err(violation) = session.check_invariants() {
        panic!("session invariant broken: {violation}");
    }
}

pub fn last_report(world: &World) -> ValidationReport {
    match &world.resource::<LastValidation>().0 {
        Some(report) => report.clone(),
        None => panic!("no validation has run"),
    }
}
