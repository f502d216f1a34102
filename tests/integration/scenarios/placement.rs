use drop_match::board::{cell_view, CellView, DragPayload, MatchSession};

use crate::harness::*;

#[test]
fn drop_moves_item_from_menu_to_cell() {
    let mut app = headless_app(&row_board(3));
    tick(&mut app);

    request_drop(&mut app, "c2", 2);
    tick(&mut app);

    let world = app.world();
    assert_cell_holds(world, "c2", 2);
    assert_not_in_menu(world, 2);
    assert_eq!(menu_ids(world), vec![1, 3]);
    assert_invariants(world);
}

#[test]
fn dropped_cell_renders_icon_with_return_action() {
    let mut app = headless_app(&row_board(2));
    tick(&mut app);

    request_drop(&mut app, "c1", 2);
    tick(&mut app);

    let session = app.world().resource::<MatchSession>();
    match cell_view(session, "c1") {
        Some(CellView::Icon { icon, actions }) => {
            assert_eq!(icon, icon_for(2));
            assert!(!actions.is_empty(), "dropped item should be returnable");
        }
        other => panic!("expected icon view for c1, got {other:?}"),
    }
    match cell_view(session, "c2") {
        Some(CellView::Hint { description }) => {
            assert_eq!(description, "Description of item 2");
        }
        other => panic!("expected hint view for c2, got {other:?}"),
    }
}

#[test]
fn drop_on_occupied_cell_leaves_everything_in_place() {
    let mut app = headless_app(&row_board(3));
    tick(&mut app);

    request_drop(&mut app, "c1", 1);
    tick(&mut app);
    request_drop(&mut app, "c1", 3);
    tick(&mut app);

    let world = app.world();
    assert_cell_holds(world, "c1", 1);
    assert_in_menu(world, 3);
    assert_invariants(world);
}

#[test]
fn two_drops_on_one_cell_in_a_frame_keep_the_first() {
    let mut app = headless_app(&row_board(3));
    tick(&mut app);

    request_drop(&mut app, "c1", 2);
    request_drop(&mut app, "c1", 3);
    tick(&mut app);

    let world = app.world();
    assert_cell_holds(world, "c1", 2);
    assert_in_menu(world, 3);
    assert_invariants(world);
}

#[test]
fn malformed_payload_changes_nothing() {
    let mut app = headless_app(&row_board(2));
    tick(&mut app);

    request_raw_drop(&mut app, "c1", "not a payload");
    request_raw_drop(&mut app, "c2", "");
    tick(&mut app);

    let world = app.world();
    assert_cell_empty(world, "c1");
    assert_cell_empty(world, "c2");
    assert_eq!(menu_ids(world), vec![1, 2]);
}

#[test]
fn payload_for_unknown_item_or_cell_is_ignored() {
    let mut app = headless_app(&row_board(2));
    tick(&mut app);

    let stranger = DragPayload::new(42, "icons/item42.png".to_string());
    let Ok(encoded) = stranger.encode() else {
        panic!("payload failed to encode");
    };
    request_raw_drop(&mut app, "c1", &encoded);
    request_drop(&mut app, "nowhere", 1);
    tick(&mut app);

    let world = app.world();
    assert_cell_empty(world, "c1");
    assert_eq!(menu_ids(world), vec![1, 2]);
    assert_invariants(world);
}

#[test]
fn item_already_on_board_cannot_be_dropped_again() {
    let mut app = headless_app(&row_board(2));
    tick(&mut app);

    request_drop(&mut app, "c1", 1);
    tick(&mut app);
    request_drop(&mut app, "c2", 1);
    tick(&mut app);

    let world = app.world();
    assert_cell_holds(world, "c1", 1);
    assert_cell_empty(world, "c2");
    assert_invariants(world);
}

#[test]
fn return_appends_item_to_end_of_menu() {
    let mut app = headless_app(&row_board(3));
    tick(&mut app);

    request_drop(&mut app, "c1", 1);
    tick(&mut app);
    request_return(&mut app, "c1");
    tick(&mut app);

    let world = app.world();
    assert_cell_empty(world, "c1");
    assert_eq!(menu_ids(world), vec![2, 3, 1]);
    assert_invariants(world);
}

#[test]
fn return_from_empty_cell_is_a_no_op() {
    let mut app = headless_app(&row_board(2));
    tick(&mut app);

    request_return(&mut app, "c1");
    request_return(&mut app, "missing");
    tick(&mut app);

    let world = app.world();
    assert_eq!(menu_ids(world), vec![1, 2]);
    assert_invariants(world);
}

#[test]
fn seeded_item_starts_on_board_without_return_action() {
    let board = with_seed(row_board(3), "c3", 3);
    let mut app = headless_app(&board);
    tick(&mut app);

    let world = app.world();
    assert_cell_holds(world, "c3", 3);
    assert_not_in_menu(world, 3);
    assert_invariants(world);

    let session = world.resource::<MatchSession>();
    match cell_view(session, "c3") {
        Some(CellView::Icon { actions, .. }) => assert!(actions.is_empty()),
        other => panic!("expected icon view for seeded cell, got {other:?}"),
    }
}

#[test]
fn seeded_item_can_still_be_returned_by_request() {
    let board = with_seed(row_board(2), "c1", 2);
    let mut app = headless_app(&board);
    tick(&mut app);

    request_return(&mut app, "c1");
    tick(&mut app);

    let world = app.world();
    assert_cell_empty(world, "c1");
    assert_eq!(menu_ids(world), vec![1, 2]);
}

#[test]
fn rejected_requests_do_not_mark_session_changed() {
    let mut app = headless_app(&row_board(2));
    track_session_changes(&mut app);
    tick_n(&mut app, 2);

    request_drop(&mut app, "c1", 1);
    tick(&mut app);
    reset_session_changes(&mut app);

    request_drop(&mut app, "c1", 2);
    request_drop(&mut app, "nowhere", 2);
    request_raw_drop(&mut app, "c2", "not a payload");
    request_return(&mut app, "c2");
    request_return(&mut app, "nowhere");
    tick(&mut app);
    assert_eq!(session_changes(&app), 0, "rejected requests marked a change");

    request_drop(&mut app, "c2", 2);
    tick(&mut app);
    assert_eq!(session_changes(&app), 1);

    request_return(&mut app, "c2");
    tick(&mut app);
    assert_eq!(session_changes(&app), 2);
}
