use super::session::{PlacementOrigin, Session};

/// Mutations a player may trigger from a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAction {
    Return,
}

/// What a cell shows. Read-only; the UI turns `actions` into buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellView {
    /// Empty cell: the description of the item that belongs here.
    Hint { description: String },
    Icon {
        icon: String,
        actions: Vec<CellAction>,
    },
}

impl CellView {
    pub fn actions(&self) -> &[CellAction] {
        match self {
            CellView::Hint { .. } => &[],
            CellView::Icon { actions, .. } => actions,
        }
    }
}

pub fn cell_view(session: &Session, cell_id: &str) -> Option<CellView> {
    let cell = session.cell(cell_id)?;

    let view = match &cell.placed {
        None => CellView::Hint {
            description: session
                .catalog()
                .get(cell.target)
                .map(|item| item.description.clone())
                .unwrap_or_default(),
        },
        Some(placement) => {
            let actions = match placement.origin {
                PlacementOrigin::Dropped => vec![CellAction::Return],
                PlacementOrigin::Seeded => Vec::new(),
            };
            CellView::Icon {
                icon: placement.icon.clone(),
                actions,
            }
        }
    };
    Some(view)
}
