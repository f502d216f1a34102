use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::collections::HashMap;

use super::catalog::{BoardDef, BoardError, Catalog, CellId, ItemId, MenuOrder};
use super::payload::DragPayload;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub item_id: ItemId,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOrigin {
    Dropped,
    Seeded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub item_id: ItemId,
    pub icon: String,
    pub origin: PlacementOrigin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub id: CellId,
    pub target: ItemId,
    pub placed: Option<Placement>,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        self.placed.is_none()
    }

    pub fn placed_item(&self) -> Option<ItemId> {
        self.placed.as_ref().map(|placement| placement.item_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Menu,
    Cell(CellId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Placed,
    CellOccupied,
    UnknownCell,
    UnknownItem,
    NotInMenu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    Returned(ItemId),
    CellEmpty,
    UnknownCell,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    Drop { cell_id: CellId, payload: DragPayload },
    Return { cell_id: CellId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Drop(DropOutcome),
    Return(ReturnOutcome),
}

impl ActionOutcome {
    pub fn changed_state(self) -> bool {
        matches!(
            self,
            ActionOutcome::Drop(DropOutcome::Placed)
                | ActionOutcome::Return(ReturnOutcome::Returned(_))
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    Missing(ItemId),
    Duplicated { item: ItemId, count: usize },
    UnknownItem(ItemId),
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvariantViolation::Missing(item) => {
                write!(f, "item {item} is neither in the menu nor in a cell")
            }
            InvariantViolation::Duplicated { item, count } => {
                write!(f, "item {item} appears {count} times across menu and cells")
            }
            InvariantViolation::UnknownItem(item) => {
                write!(f, "item {item} is on the board but not in the catalog")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// The single game session: catalog, unplaced menu entries, and cells.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    menu: Vec<MenuEntry>,
    cells: Vec<Cell>,
}

impl Session {
    /// Build the starting session for a board.
    ///
    /// # Errors
    /// Returns the board's validation error if it is inconsistent.
    pub fn from_board(board: &BoardDef) -> Result<Self, BoardError> {
        board.validate()?;

        let catalog = Catalog::new(board.items.clone());
        let seeds: HashMap<&str, ItemId> = board
            .seeded
            .iter()
            .map(|seed| (seed.cell.as_str(), seed.item))
            .collect();

        let mut cells = Vec::with_capacity(board.cells.len());
        for def in &board.cells {
            let placed = seeds.get(def.id.as_str()).and_then(|&item_id| {
                catalog.get(item_id).map(|item| Placement {
                    item_id,
                    icon: item.icon.clone(),
                    origin: PlacementOrigin::Seeded,
                })
            });
            cells.push(Cell {
                id: def.id.clone(),
                target: def.target,
                placed,
            });
        }

        let order = menu_order(&catalog, &board.menu_order);
        let menu = order
            .into_iter()
            .filter(|id| !seeds.values().any(|seeded| seeded == id))
            .filter_map(|id| {
                catalog.get(id).map(|item| MenuEntry {
                    item_id: id,
                    icon: item.icon.clone(),
                })
            })
            .collect();

        Ok(Self {
            catalog,
            menu,
            cells,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn menu(&self) -> &[MenuEntry] {
        &self.menu
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, cell_id: &str) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.id == cell_id)
    }

    pub fn in_menu(&self, item_id: ItemId) -> bool {
        self.menu.iter().any(|entry| entry.item_id == item_id)
    }

    pub fn locate(&self, item_id: ItemId) -> Option<Location> {
        if self.in_menu(item_id) {
            return Some(Location::Menu);
        }
        self.cells
            .iter()
            .find(|cell| cell.placed_item() == Some(item_id))
            .map(|cell| Location::Cell(cell.id.clone()))
    }

    /// Move an item from the menu onto a cell. Anything other than
    /// [`DropOutcome::Placed`] leaves the session untouched.
    pub fn drop_item(&mut self, cell_id: &str, payload: &DragPayload) -> DropOutcome {
        let Some(cell_index) = self.cells.iter().position(|cell| cell.id == cell_id) else {
            return DropOutcome::UnknownCell;
        };
        if !self.cells[cell_index].is_empty() {
            return DropOutcome::CellOccupied;
        }
        if !self.catalog.contains(payload.id) {
            return DropOutcome::UnknownItem;
        }
        let Some(menu_index) = self
            .menu
            .iter()
            .position(|entry| entry.item_id == payload.id)
        else {
            return DropOutcome::NotInMenu;
        };

        self.menu.remove(menu_index);
        self.cells[cell_index].placed = Some(Placement {
            item_id: payload.id,
            icon: payload.url.clone(),
            origin: PlacementOrigin::Dropped,
        });
        DropOutcome::Placed
    }

    /// Move whatever sits in a cell back to the end of the menu.
    pub fn return_to_menu(&mut self, cell_id: &str) -> ReturnOutcome {
        let Some(cell) = self.cells.iter_mut().find(|cell| cell.id == cell_id) else {
            return ReturnOutcome::UnknownCell;
        };
        let Some(placement) = cell.placed.take() else {
            return ReturnOutcome::CellEmpty;
        };

        let item_id = placement.item_id;
        self.menu.push(MenuEntry {
            item_id,
            icon: placement.icon,
        });
        ReturnOutcome::Returned(item_id)
    }

    pub fn apply(&mut self, action: &BoardAction) -> ActionOutcome {
        match action {
            BoardAction::Drop { cell_id, payload } => {
                ActionOutcome::Drop(self.drop_item(cell_id, payload))
            }
            BoardAction::Return { cell_id } => ActionOutcome::Return(self.return_to_menu(cell_id)),
        }
    }

    /// # Errors
    /// Returns the first item that is missing, duplicated, or unknown.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut counts: HashMap<ItemId, usize> = HashMap::new();
        let on_board = self
            .menu
            .iter()
            .map(|entry| entry.item_id)
            .chain(self.cells.iter().filter_map(Cell::placed_item));
        for item_id in on_board {
            if !self.catalog.contains(item_id) {
                return Err(InvariantViolation::UnknownItem(item_id));
            }
            *counts.entry(item_id).or_insert(0) += 1;
        }

        for item in self.catalog.iter() {
            match counts.get(&item.id).copied().unwrap_or(0) {
                0 => return Err(InvariantViolation::Missing(item.id)),
                1 => {}
                count => {
                    return Err(InvariantViolation::Duplicated {
                        item: item.id,
                        count,
                    })
                }
            }
        }
        Ok(())
    }
}

/// Pure form of [`Session::apply`]: the input session is left as it was.
pub fn reduce(state: &Session, action: &BoardAction) -> Session {
    let mut next = state.clone();
    next.apply(action);
    next
}

fn menu_order(catalog: &Catalog, order: &MenuOrder) -> Vec<ItemId> {
    let catalog_order = || catalog.iter().map(|item| item.id).collect::<Vec<_>>();
    match order {
        MenuOrder::Catalog => catalog_order(),
        MenuOrder::Listed(listed) => {
            let mut ids: Vec<ItemId> = Vec::with_capacity(catalog.len());
            for id in listed {
                if !ids.contains(id) {
                    ids.push(*id);
                }
            }
            // Items the list forgot still have to start somewhere.
            for id in catalog_order() {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
            ids
        }
        MenuOrder::Shuffled(seed) => {
            let mut ids = catalog_order();
            let mut rng = StdRng::seed_from_u64(*seed);
            ids.shuffle(&mut rng);
            ids
        }
    }
}
