//! Board setup: randomized, constraint-checked ship placement.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::SetupError;
use crate::config::{shape_for, PLACEMENT_ATTEMPTS};
use crate::fleet::Fleet;
use crate::grid::{Grid, GridError, ORTHOGONALS};
use crate::shape::{ShipId, ShipShape};

/// Cell occupancy counts derived from the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BoardStats {
    pub empty: usize,
    pub occupied: usize,
}

/// Owns the ship grid and places a fleet onto it at random, keeping ships
/// from overlapping or touching orthogonally. Cells hold the occupant's type
/// id, `0` meaning water.
pub struct BoardSetup {
    grid: Grid<ShipId>,
    fleet: Fleet,
}

impl BoardSetup {
    /// Create an empty board for the given dimensions and fleet.
    pub fn new(rows: usize, cols: usize, fleet: Fleet) -> Self {
        BoardSetup {
            grid: Grid::new(rows, cols),
            fleet,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// The fleet this board was constructed with. Placement does not consume
    /// it, so the same fleet is used again after a `reset`.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Place every ship in the fleet at random anchors. Each instance gets
    /// up to [`PLACEMENT_ATTEMPTS`] uniformly random anchors; running out
    /// aborts the whole setup and leaves the board partially populated, so
    /// callers must [`reset`](Self::reset) before trying again.
    pub fn place_all_ships<R: Rng>(&mut self, rng: &mut R) -> Result<(), SetupError> {
        let pairs: Vec<(ShipId, u32)> = self.fleet.iter().collect();
        for (id, count) in pairs {
            let shape = shape_for(id).ok_or(SetupError::InvalidShipType(id))?;
            for _ in 0..count {
                self.place_one(rng, shape)?;
            }
        }
        Ok(())
    }

    fn place_one<R: Rng>(&mut self, rng: &mut R, shape: &ShipShape) -> Result<(), SetupError> {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let x = rng.random_range(0..self.grid.cols());
            let y = rng.random_range(0..self.grid.rows());
            if self.can_place(shape, x, y) {
                self.place_shape(shape, x, y)?;
                log::debug!("placed {} anchored at ({}, {})", shape, x, y);
                return Ok(());
            }
        }
        log::warn!(
            "no valid anchor for {} after {} attempts",
            shape,
            PLACEMENT_ATTEMPTS
        );
        Err(SetupError::PlacementExhausted(shape.id()))
    }

    /// Returns `true` when every cell of `shape` anchored at (x, y) is in
    /// bounds and empty, and none of them touches an already placed ship
    /// orthogonally. Diagonal contact is allowed.
    pub fn can_place(&self, shape: &ShipShape, x: usize, y: usize) -> bool {
        let Some(cells) = shape.project(x, y) else {
            return false;
        };
        cells
            .iter()
            .all(|&(cx, cy)| matches!(self.grid.get(cx, cy), Ok(0)))
            && !self.touches_ship(&cells)
    }

    /// Whether any of `cells` has an orthogonally adjacent occupied cell.
    fn touches_ship(&self, cells: &[(usize, usize)]) -> bool {
        cells.iter().any(|&(cx, cy)| {
            ORTHOGONALS.iter().any(|&(dx, dy)| {
                match (
                    cx.checked_add_signed(dx as isize),
                    cy.checked_add_signed(dy as isize),
                ) {
                    (Some(ax), Some(ay)) => {
                        matches!(self.grid.get(ax, ay), Ok(id) if id != 0)
                    }
                    _ => false,
                }
            })
        })
    }

    fn place_shape(&mut self, shape: &ShipShape, x: usize, y: usize) -> Result<(), GridError> {
        // callers check `can_place` first, so projection cannot go negative
        let cells = shape
            .project(x, y)
            .ok_or(GridError::OutOfBounds { x, y })?;
        for (cx, cy) in cells {
            self.grid.set(cx, cy, shape.id())?;
        }
        Ok(())
    }

    /// Occupant type id at (x, y), `0` for water. Out-of-bounds coordinates
    /// are reported, never clamped.
    pub fn tile(&self, x: usize, y: usize) -> Result<ShipId, GridError> {
        self.grid.get(x, y)
    }

    /// Read-only view of the ship grid.
    pub fn board(&self) -> &Grid<ShipId> {
        &self.grid
    }

    /// Clear the grid back to all-water. The fleet is untouched.
    pub fn reset(&mut self) {
        self.grid.clear_all();
    }

    /// Empty/occupied cell counts. Pure query.
    pub fn stats(&self) -> BoardStats {
        let empty = self.grid.count(0);
        BoardStats {
            empty,
            occupied: self.grid.len() - empty,
        }
    }
}

impl fmt::Debug for BoardSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoardSetup {{\n  fleet: {},\n  grid:\n{}\n}}",
            self.fleet, self.grid
        )
    }
}
