//! Fixed ship catalog and placement tuning constants.

use crate::fleet::Fleet;
use crate::shape::{ShipId, ShipShape};

/// Random anchors tried per ship instance before placement gives up.
/// Bounds worst-case setup time on dense boards; tight boards may still
/// fail and must be retried with a different fleet or grid size.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Number of ship types in the catalog.
pub const NUM_SHAPES: usize = 7;

/// The versioned shape catalog, keyed by type id 1–7. Offsets are (dx, dy)
/// relative to the anchor, x growing rightwards and y downwards. Consumers
/// must reproduce these tables exactly for fleet compatibility.
pub const SHAPES: [ShipShape; NUM_SHAPES] = [
    ShipShape::new(1, "Destroyer", &[(0, 0), (1, 0)]),
    ShipShape::new(2, "Cruiser", &[(0, 0), (1, 0), (2, 0)]),
    ShipShape::new(3, "Battleship", &[(0, 0), (1, 0), (2, 0), (3, 0)]),
    ShipShape::new(4, "Monitor", &[(0, 0), (1, 0), (2, 0), (1, 1)]),
    ShipShape::new(5, "Gunboat", &[(0, 0), (1, 0), (2, 0), (2, 1)]),
    ShipShape::new(6, "Corvette", &[(0, 1), (1, 1), (1, 0), (2, 0)]),
    ShipShape::new(7, "Carrier", &[(1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (3, 1)]),
];

/// Look up a catalog shape by type id.
pub fn shape_for(id: ShipId) -> Option<&'static ShipShape> {
    SHAPES.iter().find(|s| s.id() == id)
}

/// The default inventory: one ship of each catalog type.
pub fn standard_fleet() -> Fleet {
    let mut fleet = Fleet::new();
    for shape in &SHAPES {
        fleet.add(shape.id(), 1);
    }
    fleet
}
