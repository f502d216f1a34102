pub mod catalog;
pub mod payload;
pub mod render;
pub mod session;
pub mod validation;

pub use catalog::{
    BoardDef, BoardError, Catalog, CellDef, CellId, ItemDef, ItemId, MenuOrder, SeedDef,
};
pub use payload::{DragPayload, PayloadError};
pub use render::{cell_view, CellAction, CellView};
pub use session::{
    reduce, ActionOutcome, BoardAction, Cell, DropOutcome, InvariantViolation, Location,
    MenuEntry, Placement, PlacementOrigin, ReturnOutcome, Session,
};
pub use validation::{validate, CellVerdict, ValidationReport, FAILURE_MESSAGE, SUCCESS_MESSAGE};

use bevy::prelude::*;

use crate::grid::BoardLayout;

/// The live session. Only the board systems below mutate it.
#[derive(Resource, Debug, Clone, Deref, DerefMut)]
pub struct MatchSession(pub Session);

/// Raw drop from the drag transport; `payload` is decoded before use.
#[derive(Message, Debug, Clone)]
pub struct DropRequest {
    pub cell_id: CellId,
    pub payload: String,
}

#[derive(Message, Debug, Clone)]
pub struct ReturnRequest {
    pub cell_id: CellId,
}

#[derive(Message, Debug, Clone, Default)]
pub struct ValidateRequest;

#[derive(Message, Debug, Clone)]
pub struct ValidationResult {
    pub report: ValidationReport,
}

#[derive(Resource, Debug, Default)]
pub struct LastValidation(pub Option<ValidationReport>);

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum BoardSet {
    Apply,
    Feedback,
}

fn configure_board_system_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (BoardSet::Apply, BoardSet::Feedback)
            .chain()
            .in_set(crate::GameplaySet::BoardUpdate),
    );
}

/// Insert the session and layout for `board`.
///
/// # Errors
/// Returns the board's validation error; nothing is inserted in that case.
pub fn install_board(world: &mut World, board: &BoardDef) -> Result<(), BoardError> {
    let session = Session::from_board(board)?;
    world.insert_resource(MatchSession(session));
    world.insert_resource(BoardLayout::from_board(board));
    Ok(())
}

/// Loads the embedded board unless a session was installed beforehand.
fn load_board(world: &mut World) {
    if world.contains_resource::<MatchSession>() {
        return;
    }

    match BoardDef::load_from_assets().and_then(|board| install_board(world, &board)) {
        Ok(()) => {
            if let Some(session) = world.get_resource::<MatchSession>() {
                info!(
                    "Board loaded: {} items, {} cells",
                    session.catalog().len(),
                    session.cells().len()
                );
            }
        }
        Err(err) => error!("Failed to load board: {err}"),
    }
}

pub fn handle_drop_requests(
    mut requests: MessageReader<DropRequest>,
    mut session: ResMut<MatchSession>,
) {
    for request in requests.read() {
        let payload = match DragPayload::decode(&request.payload) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("Drop on cell '{}' aborted: {err}", request.cell_id);
                continue;
            }
        };

        // Rejected drops must not wake the views that rebuild on change.
        match session
            .bypass_change_detection()
            .drop_item(&request.cell_id, &payload)
        {
            DropOutcome::Placed => {
                session.set_changed();
                info!("Item {} dropped on cell '{}'", payload.id, request.cell_id);
            }
            DropOutcome::CellOccupied => {
                debug!(
                    "Cell '{}' already occupied, item {} stays in menu",
                    request.cell_id, payload.id
                );
            }
            rejected => {
                warn!(
                    "Drop of item {} on cell '{}' ignored: {rejected:?}",
                    payload.id, request.cell_id
                );
            }
        }
    }
}

pub fn handle_return_requests(
    mut requests: MessageReader<ReturnRequest>,
    mut session: ResMut<MatchSession>,
) {
    for request in requests.read() {
        match session
            .bypass_change_detection()
            .return_to_menu(&request.cell_id)
        {
            ReturnOutcome::Returned(item_id) => {
                session.set_changed();
                info!("Item {item_id} returned to menu from cell '{}'", request.cell_id);
            }
            ReturnOutcome::CellEmpty => {
                debug!("Return from empty cell '{}' ignored", request.cell_id);
            }
            ReturnOutcome::UnknownCell => {
                warn!("Return from unknown cell '{}' ignored", request.cell_id);
            }
        }
    }
}

pub fn handle_validate_requests(
    mut requests: MessageReader<ValidateRequest>,
    mut results: MessageWriter<ValidationResult>,
    mut last: ResMut<LastValidation>,
    session: Res<MatchSession>,
) {
    // Several clicks in one frame see the same state; answer once.
    if requests.read().count() == 0 {
        return;
    }

    let report = validate(&session);
    info!(
        "Validation: {} ({}/{} correct)",
        report.message(),
        report.correct_count(),
        report.total()
    );
    last.0 = Some(report.clone());
    results.write(ValidationResult { report });
}

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        configure_board_system_sets(app);

        app.add_message::<DropRequest>()
            .add_message::<ReturnRequest>()
            .add_message::<ValidateRequest>()
            .add_message::<ValidationResult>()
            .init_resource::<LastValidation>()
            .add_systems(Startup, load_board)
            .add_systems(
                Update,
                (
                    (handle_drop_requests, handle_return_requests)
                        .chain()
                        .in_set(BoardSet::Apply),
                    handle_validate_requests.in_set(BoardSet::Feedback),
                )
                    .run_if(resource_exists::<MatchSession>),
            );
    }
}
