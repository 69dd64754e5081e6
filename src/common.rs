//! Common types for fleet setup: placement errors.

use crate::grid::GridError;
use crate::shape::ShipId;

/// Errors returned by board setup operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// Underlying grid error (e.g., out-of-bounds access).
    Grid(GridError),
    /// Fleet references a ship type missing from the shape catalog.
    InvalidShipType(ShipId),
    /// A ship instance found no valid anchor within the retry bound.
    /// The board is left partially populated; callers must reset before
    /// retrying.
    PlacementExhausted(ShipId),
}

impl From<GridError> for SetupError {
    fn from(err: GridError) -> Self {
        SetupError::Grid(err)
    }
}

impl core::fmt::Display for SetupError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SetupError::Grid(e) => write!(f, "Grid error: {}", e),
            SetupError::InvalidShipType(id) => {
                write!(f, "Ship type {} not found in the shape catalog", id)
            }
            SetupError::PlacementExhausted(id) => {
                write!(f, "Unable to place ship type {}", id)
            }
        }
    }
}
