use bevy::prelude::*;

use crate::{board::MatchSession, grid::BoardLayout};

pub struct InvariantPlugin;

impl Plugin for InvariantPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostUpdate,
            (check_session_invariants, check_layout_covers_cells),
        );
    }
}

fn report_violation(subject: &str, message: &str) {
    let msg = format!("INVARIANT VIOLATION [{subject}]: {message}");
    if cfg!(test) {
        #[allow(clippy::panic)]
        {
            panic!("{msg}");
        }
    } else {
        error!("{msg}");
    }
}

fn check_session_invariants(session: Option<Res<MatchSession>>) {
    let Some(session) = session else {
        return;
    };
    if !session.is_changed() {
        return;
    }

    if let Err(violation) = session.check_invariants() {
        report_violation("session", &violation.to_string());
    }
    for cell in session.cells() {
        if !session.catalog().contains(cell.target) {
            report_violation(&cell.id, "cell target is not in the catalog");
        }
    }
}

fn check_layout_covers_cells(session: Option<Res<MatchSession>>, layout: Option<Res<BoardLayout>>) {
    let (Some(session), Some(layout)) = (session, layout) else {
        return;
    };
    if !session.is_changed() && !layout.is_changed() {
        return;
    }

    for cell in session.cells() {
        if layout.rect_for(&cell.id).is_none() {
            report_violation(&cell.id, "cell has no layout rectangle");
        }
    }
}
