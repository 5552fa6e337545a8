//! Cell occupancy snapshot

use std::collections::HashMap;
use crate::grid::{Cell, GridSpec};
use crate::item::{Item, ItemId};

/// Which items sit in which cell of a grid-mode container
///
/// Built once per drop from the items' pixel positions. A cell can hold
/// several items after a zoom or an edge overwrite; they are kept in
/// container order.
#[derive(Clone, Debug, Default)]
pub struct Occupancy {
    cells: HashMap<Cell, Vec<ItemId>>,
}

impl Occupancy {
    /// Create an empty occupancy map
    pub fn new() -> Self {
        Self::default()
    }

    /// Map every item except `exclude` onto the grid
    pub fn from_items<'a, I>(items: I, grid: &GridSpec, exclude: Option<&ItemId>) -> Self
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut occupancy = Self::new();
        for item in items {
            if Some(&item.id) == exclude {
                continue;
            }
            occupancy.insert(grid.to_cell(item.position), item.id.clone());
        }
        occupancy
    }

    /// Add an item to a cell; returns `false` if the cell was already taken
    pub fn insert(&mut self, cell: Cell, id: ItemId) -> bool {
        let occupants = self.cells.entry(cell).or_default();
        occupants.push(id);
        occupants.len() == 1
    }

    /// Items in a cell, in container order
    #[inline]
    pub fn occupants(&self, cell: Cell) -> &[ItemId] {
        self.cells.get(&cell).map_or(&[], Vec::as_slice)
    }

    /// Check if a cell holds anyone other than `ignore`
    pub fn is_occupied(&self, cell: Cell, ignore: Option<&ItemId>) -> bool {
        self.occupants(cell).iter().any(|id| Some(id) != ignore)
    }

    /// Number of occupied cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cell is occupied
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
