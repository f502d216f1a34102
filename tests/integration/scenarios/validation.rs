use drop_match::board::{CellVerdict, MatchSession, FAILURE_MESSAGE, SUCCESS_MESSAGE};

use crate::harness::*;

#[test]
fn all_matching_drops_validate_successfully() {
    let mut app = headless_app(&row_board(3));
    tick(&mut app);

    for id in 1..=3 {
        request_drop(&mut app, &cell_name(id), id);
    }
    tick(&mut app);
    request_validation(&mut app);
    tick(&mut app);

    let report = last_report(app.world());
    assert!(report.is_success());
    assert_eq!(report.message(), SUCCESS_MESSAGE);
    assert_eq!(report.correct_count(), 3);
    assert!(menu_ids(app.world()).is_empty());
}

#[test]
fn swapped_items_fail_validation() {
    let mut app = headless_app(&row_board(2));
    tick(&mut app);

    request_drop(&mut app, "c1", 2);
    request_drop(&mut app, "c2", 1);
    tick(&mut app);
    request_validation(&mut app);
    tick(&mut app);

    let report = last_report(app.world());
    assert!(!report.is_success());
    assert_eq!(report.message(), FAILURE_MESSAGE);
    assert_eq!(
        report.verdict("c1"),
        Some(CellVerdict::Misplaced { placed: 2 })
    );
}

#[test]
fn empty_cell_fails_validation() {
    let mut app = headless_app(&row_board(2));
    tick(&mut app);

    request_drop(&mut app, "c1", 1);
    tick(&mut app);
    request_validation(&mut app);
    tick(&mut app);

    let report = last_report(app.world());
    assert!(!report.is_success());
    assert_eq!(report.verdict("c1"), Some(CellVerdict::Correct));
    assert_eq!(report.verdict("c2"), Some(CellVerdict::Empty));
}

#[test]
fn drop_then_return_fails_validation() {
    let mut app = headless_app(&row_board(1));
    tick(&mut app);

    request_drop(&mut app, "c1", 1);
    tick(&mut app);
    request_return(&mut app, "c1");
    tick(&mut app);
    request_validation(&mut app);
    tick(&mut app);

    assert!(!last_report(app.world()).is_success());
}

#[test]
fn validation_in_same_frame_sees_that_frames_drops() {
    let mut app = headless_app(&row_board(1));
    tick(&mut app);

    request_drop(&mut app, "c1", 1);
    request_validation(&mut app);
    tick(&mut app);

    assert!(last_report(app.world()).is_success());
}

#[test]
fn validation_does_not_change_the_session() {
    let mut app = headless_app(&row_board(2));
    tick(&mut app);
    request_drop(&mut app, "c2", 1);
    tick(&mut app);

    let before = menu_ids(app.world());
    request_validation(&mut app);
    request_validation(&mut app);
    tick_n(&mut app, 2);

    let world = app.world();
    assert_eq!(menu_ids(world), before);
    assert_cell_holds(world, "c2", 1);
}

#[test]
fn embedded_board_loads_and_solves() {
    let mut app = embedded_app();
    tick(&mut app);

    let world = app.world();
    assert_eq!(menu_ids(world), vec![6, 7, 8, 9, 1, 2, 3, 4, 5]);
    assert_eq!(world.resource::<MatchSession>().cells().len(), 9);

    for id in 1..=9 {
        request_drop(&mut app, &id.to_string(), id);
    }
    tick(&mut app);
    request_validation(&mut app);
    tick(&mut app);

    let report = last_report(app.world());
    assert!(report.is_success());
    assert_eq!(report.total(), 9);
    assert_invariants(app.world());
}
