//! Chain displacement

use std::collections::{HashSet, VecDeque};
use serde::Serialize;
use crate::grid::{Cell, Direction, GridDims};
use crate::item::ItemId;
use super::Occupancy;

/// One occupant pushed to a new cell
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Displacement {
    pub item: ItemId,
    pub from: Cell,
    pub to: Cell,
}

/// Outcome of resolving one drop
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Cell the dragged item lands in
    pub target: Cell,
    /// Push direction, `None` when the target was free
    pub direction: Option<Direction>,
    /// Occupants to move, in chain order starting at the target
    pub displacements: Vec<Displacement>,
    /// The chain hit the grid edge and left items sharing the edge cell
    pub overwrite: bool,
    /// Cells inspected while walking the chain
    pub steps: u32,
}

impl Resolution {
    fn direct(target: Cell) -> Self {
        Self {
            target,
            direction: None,
            displacements: Vec::new(),
            overwrite: false,
            steps: 0,
        }
    }

    /// Check if any occupant has to move
    #[inline]
    pub fn has_displacements(&self) -> bool {
        !self.displacements.is_empty()
    }
}

/// Resolve dropping `dragged` (currently at `from`) onto `target`
///
/// A free target is taken as is. Otherwise the target's occupants are
/// pushed in the drag direction: each following cell takes the item that
/// has waited longest and its own occupants join the queue, until the
/// queue is empty. Items stacked in one cell are thereby spread out. Items
/// still queued at the grid edge stay in the edge cell and share it.
///
/// The walk visits each cell and moves each item at most once, so it ends
/// within `dims.max_dim()` steps.
pub fn resolve(
    occupancy: &Occupancy,
    dims: GridDims,
    dragged: &ItemId,
    from: Cell,
    target: Cell,
) -> Resolution {
    let target = dims.clamp(i64::from(target.col), i64::from(target.row));
    if !occupancy.is_occupied(target, Some(dragged)) {
        return Resolution::direct(target);
    }

    let direction = Direction::from_drag(from, target);
    let mut visited_cells: HashSet<Cell> = HashSet::new();
    let mut moved: HashSet<&ItemId> = HashSet::new();
    // Items waiting for a cell, with the cell they came from
    let mut queue: VecDeque<(&ItemId, Cell)> = VecDeque::new();
    let mut displacements = Vec::new();
    let mut overwrite = false;
    let mut steps = 0;
    let mut cell = target;

    while visited_cells.insert(cell) {
        steps += 1;
        for id in occupancy.occupants(cell) {
            if id != dragged && moved.insert(id) {
                queue.push_back((id, cell));
            }
        }
        if cell != target {
            if let Some((id, origin)) = queue.pop_front() {
                displacements.push(Displacement {
                    item: id.clone(),
                    from: origin,
                    to: cell,
                });
            }
        }
        if queue.is_empty() {
            break;
        }

        let next = dims.step(cell, direction);
        if next == cell {
            overwrite = true;
            for (id, origin) in queue.drain(..) {
                if origin != cell {
                    displacements.push(Displacement {
                        item: id.clone(),
                        from: origin,
                        to: cell,
                    });
                }
            }
            break;
        }
        cell = next;
    }

    Resolution {
        target,
        direction: Some(direction),
        displacements,
        overwrite,
        steps,
    }
}
