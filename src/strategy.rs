//! Attack targeting: random search plus directed follow-up after hits.
//!
//! The strategy keeps its own knowledge of the enemy board and alternates
//! between two modes. While no hits are outstanding it draws uniformly
//! random unexplored coordinates (searching). After a hit on a ship that did
//! not sink, the hit's unexplored orthogonal neighbors are queued and
//! attacked first-in-first-out before random search resumes (hunting). All
//! four neighbors are explored; the orientation of the struck ship is not
//! inferred.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::fleet::Fleet;
use crate::grid::{Grid, GridError, ORTHOGONALS};

/// Knowledge about one enemy cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellState {
    #[default]
    Unknown,
    Hit,
    Miss,
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            CellState::Unknown => '?',
            CellState::Hit => 'H',
            CellState::Miss => 'M',
        };
        write!(f, "{}", c)
    }
}

/// Which mode the strategy is in for its next attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// No pending targets; attacks are drawn at random.
    Searching,
    /// Queued follow-up targets take priority over random search.
    Hunting,
}

/// Decides attack coordinates against an enemy board and updates its own
/// state from the reported results.
pub struct Strategy {
    knowledge: Grid<CellState>,
    pending: VecDeque<(usize, usize)>,
    fleet: Fleet,
}

impl Strategy {
    /// Create a strategy for an enemy board of the given dimensions carrying
    /// the given fleet. The knowledge grid starts all-unknown.
    pub fn new(rows: usize, cols: usize, fleet: Fleet) -> Self {
        Strategy {
            knowledge: Grid::new(rows, cols),
            pending: VecDeque::new(),
            fleet,
        }
    }

    /// Current mode: hunting while follow-up targets are queued.
    pub fn mode(&self) -> SearchMode {
        if self.pending.is_empty() {
            SearchMode::Searching
        } else {
            SearchMode::Hunting
        }
    }

    /// Next coordinate to attack. Queued follow-up targets are returned
    /// first, oldest first; otherwise uniformly random coordinates are drawn
    /// until an unexplored one comes up. A coordinate is never produced
    /// twice.
    ///
    /// Loops forever once the whole grid has been attacked; callers stop
    /// issuing attacks when [`all_ships_sunk`](Self::all_ships_sunk) is true
    /// or their shot budget runs out.
    pub fn next_attack<R: Rng>(&mut self, rng: &mut R) -> (usize, usize) {
        while let Some((x, y)) = self.pending.pop_front() {
            // the queue only ever holds unexplored cells, but re-check so a
            // stale entry can never be targeted twice
            if matches!(self.knowledge.get(x, y), Ok(CellState::Unknown)) {
                return (x, y);
            }
        }
        loop {
            let x = rng.random_range(0..self.knowledge.cols());
            let y = rng.random_range(0..self.knowledge.rows());
            if matches!(self.knowledge.get(x, y), Ok(CellState::Unknown)) {
                return (x, y);
            }
        }
    }

    /// Record the result of an attack at (x, y). A hit that did not sink
    /// queues the cell's unexplored orthogonal neighbors (left, right, up,
    /// down) for follow-up; neighbors already queued are not re-queued. A
    /// sunk report decrements the lowest-id fleet entry still afloat; the
    /// identity of the sunk ship is not tracked, only that some ship sank.
    pub fn register_attack(
        &mut self,
        x: usize,
        y: usize,
        is_hit: bool,
        is_sunk: bool,
    ) -> Result<(), GridError> {
        let state = if is_hit { CellState::Hit } else { CellState::Miss };
        self.knowledge.set(x, y, state)?;
        if is_hit && !is_sunk {
            for coord in self.neighbors(x, y) {
                if !self.pending.contains(&coord) {
                    self.pending.push_back(coord);
                }
            }
        }
        if is_sunk {
            if let Some(id) = self.fleet.sink_next_afloat() {
                log::debug!("ship sunk at ({}, {}), charged to type {}", x, y, id);
            }
        }
        Ok(())
    }

    /// In-bounds, unexplored, orthogonally adjacent coordinates of (x, y),
    /// in left, right, up, down order. Pure query.
    pub fn neighbors(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for &(dx, dy) in ORTHOGONALS.iter() {
            let (Some(nx), Some(ny)) = (
                x.checked_add_signed(dx as isize),
                y.checked_add_signed(dy as isize),
            ) else {
                continue;
            };
            if matches!(self.knowledge.get(nx, ny), Ok(CellState::Unknown)) {
                out.push((nx, ny));
            }
        }
        out
    }

    /// Read-only view of the knowledge grid.
    pub fn enemy_board(&self) -> &Grid<CellState> {
        &self.knowledge
    }

    /// Remaining enemy fleet counts.
    pub fn remaining_ships(&self) -> &Fleet {
        &self.fleet
    }

    /// Queued follow-up targets, oldest first.
    pub fn pending_targets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pending.iter().copied()
    }

    /// Returns `true` once every fleet count has reached zero.
    pub fn all_ships_sunk(&self) -> bool {
        self.fleet.all_sunk()
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Strategy {{\n  mode: {:?},\n  remaining: {},\n  knowledge:\n{}\n}}",
            self.mode(),
            self.fleet,
            self.knowledge
        )
    }
}
