use super::catalog::{CellId, ItemId};
use super::session::Session;

pub const SUCCESS_MESSAGE: &str = "All items are correctly placed!";
pub const FAILURE_MESSAGE: &str = "Some items are misplaced or missing!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellVerdict {
    Correct,
    Misplaced { placed: ItemId },
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub verdicts: Vec<(CellId, CellVerdict)>,
}

impl ValidationReport {
    pub fn is_success(&self) -> bool {
        self.verdicts
            .iter()
            .all(|(_, verdict)| *verdict == CellVerdict::Correct)
    }

    pub fn correct_count(&self) -> usize {
        self.verdicts
            .iter()
            .filter(|(_, verdict)| *verdict == CellVerdict::Correct)
            .count()
    }

    pub fn total(&self) -> usize {
        self.verdicts.len()
    }

    pub fn verdict(&self, cell_id: &str) -> Option<CellVerdict> {
        self.verdicts
            .iter()
            .find(|(id, _)| id == cell_id)
            .map(|(_, verdict)| *verdict)
    }

    pub fn message(&self) -> &'static str {
        if self.is_success() {
            SUCCESS_MESSAGE
        } else {
            FAILURE_MESSAGE
        }
    }
}

/// Compares every cell's placed item with the item it was labeled for.
/// Empty cells count against success; they are not an error.
pub fn validate(session: &Session) -> ValidationReport {
    let verdicts = session
        .cells()
        .iter()
        .map(|cell| {
            let verdict = match cell.placed_item() {
                None => CellVerdict::Empty,
                Some(placed) if placed == cell.target => CellVerdict::Correct,
                Some(placed) => CellVerdict::Misplaced { placed },
            };
            (cell.id.clone(), verdict)
        })
        .collect();

    ValidationReport { verdicts }
}
