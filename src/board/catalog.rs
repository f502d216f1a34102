use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::grid::{CellRect, GridSettings};

pub type ItemId = u32;
pub type CellId = String;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ItemDef {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CellDef {
    pub id: CellId,
    /// Item that belongs in this cell. Independent of the cell id.
    pub target: ItemId,
    pub rect: CellRect,
}

/// An item that starts the game already sitting in a cell.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SeedDef {
    pub cell: CellId,
    pub item: ItemId,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuOrder {
    #[default]
    Catalog,
    Listed(Vec<ItemId>),
    Shuffled(u64),
}

/// Board file contents: catalog, cells, and how the session starts.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BoardDef {
    #[serde(default)]
    pub grid: GridSettings,
    pub items: Vec<ItemDef>,
    pub cells: Vec<CellDef>,
    #[serde(default)]
    pub menu_order: MenuOrder,
    #[serde(default)]
    pub seeded: Vec<SeedDef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    Parse(String),
    EmptyBoard,
    DuplicateItem(ItemId),
    DuplicateCell(CellId),
    UnknownTarget { cell: CellId, target: ItemId },
    UnknownSeed { cell: CellId, item: ItemId },
    SeedConflict { cell: CellId, item: ItemId },
    UnknownMenuEntry(ItemId),
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::Parse(message) => write!(f, "board file could not be parsed: {message}"),
            BoardError::EmptyBoard => write!(f, "board has no items or no cells"),
            BoardError::DuplicateItem(id) => write!(f, "item id {id} is defined twice"),
            BoardError::DuplicateCell(id) => write!(f, "cell id '{id}' is defined twice"),
            BoardError::UnknownTarget { cell, target } => {
                write!(f, "cell '{cell}' targets unknown item {target}")
            }
            BoardError::UnknownSeed { cell, item } => {
                write!(f, "seed for cell '{cell}' references unknown cell or item {item}")
            }
            BoardError::SeedConflict { cell, item } => {
                write!(f, "seed of item {item} into cell '{cell}' overlaps another seed")
            }
            BoardError::UnknownMenuEntry(id) => {
                write!(f, "menu order lists item {id} which is not in the catalog")
            }
        }
    }
}

impl std::error::Error for BoardError {}

impl BoardDef {
    /// Parse and validate a RON board definition.
    ///
    /// # Errors
    /// Returns [`BoardError::Parse`] for malformed RON, or the first
    /// structural problem found by [`BoardDef::validate`].
    pub fn from_ron(ron_content: &str) -> Result<Self, BoardError> {
        let board: BoardDef =
            ron::from_str(ron_content).map_err(|err| BoardError::Parse(err.to_string()))?;
        board.validate()?;
        Ok(board)
    }

    /// Load the board embedded in the binary.
    ///
    /// # Errors
    /// Returns an error if the embedded RON content fails to parse or validate.
    pub fn load_from_assets() -> Result<Self, BoardError> {
        let ron_content = include_str!("../assets/board.ron");
        Self::from_ron(ron_content)
    }

    /// Checks that ids are unique and every reference resolves.
    ///
    /// # Errors
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.items.is_empty() || self.cells.is_empty() {
            return Err(BoardError::EmptyBoard);
        }

        let mut item_ids = HashSet::new();
        for item in &self.items {
            if !item_ids.insert(item.id) {
                return Err(BoardError::DuplicateItem(item.id));
            }
        }

        let mut cell_ids = HashSet::new();
        for cell in &self.cells {
            if !cell_ids.insert(cell.id.as_str()) {
                return Err(BoardError::DuplicateCell(cell.id.clone()));
            }
            if !item_ids.contains(&cell.target) {
                return Err(BoardError::UnknownTarget {
                    cell: cell.id.clone(),
                    target: cell.target,
                });
            }
        }

        let mut seeded_cells = HashSet::new();
        let mut seeded_items = HashSet::new();
        for seed in &self.seeded {
            if !cell_ids.contains(seed.cell.as_str()) || !item_ids.contains(&seed.item) {
                return Err(BoardError::UnknownSeed {
                    cell: seed.cell.clone(),
                    item: seed.item,
                });
            }
            if !seeded_cells.insert(seed.cell.as_str()) || !seeded_items.insert(seed.item) {
                return Err(BoardError::SeedConflict {
                    cell: seed.cell.clone(),
                    item: seed.item,
                });
            }
        }

        if let MenuOrder::Listed(order) = &self.menu_order {
            if let Some(unknown) = order.iter().find(|id| !item_ids.contains(id)) {
                return Err(BoardError::UnknownMenuEntry(*unknown));
            }
        }

        Ok(())
    }
}

/// Immutable lookup over the board's items, in board-file order.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<ItemDef>,
    index: HashMap<ItemId, usize>,
}

impl Catalog {
    pub fn new(items: Vec<ItemDef>) -> Self {
        let index = items
            .iter()
            .enumerate()
            .map(|(position, item)| (item.id, position))
            .collect();
        Self { items, index }
    }

    pub fn get(&self, id: ItemId) -> Option<&ItemDef> {
        self.index.get(&id).map(|&position| &self.items[position])
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDef> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
