//! Thin demonstration driver wiring one board and one strategy together.
//!
//! The two core components never see each other: the skirmish queries the
//! board at the strategy's chosen coordinate and feeds the hit/sunk result
//! back, the same flow an interactive frontend would drive.

use rand::Rng;

use crate::board::{BoardSetup, BoardStats};
use crate::common::SetupError;
use crate::fleet::Fleet;
use crate::grid::GridError;
use crate::strategy::Strategy;

/// Outcome of a single attack cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct AttackReport {
    pub x: usize,
    pub y: usize,
    pub hit: bool,
    pub sunk: bool,
}

/// Result of running a skirmish to completion or budget exhaustion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SkirmishSummary {
    pub shots: usize,
    pub all_sunk: bool,
    pub stats: BoardStats,
}

/// One board under attack by one strategy, both built with matching
/// dimensions and fleet.
pub struct Skirmish {
    board: BoardSetup,
    strategy: Strategy,
}

impl Skirmish {
    pub fn new(rows: usize, cols: usize, fleet: Fleet) -> Self {
        Skirmish {
            board: BoardSetup::new(rows, cols, fleet.clone()),
            strategy: Strategy::new(rows, cols, fleet),
        }
    }

    /// Place the defending fleet.
    pub fn setup<R: Rng>(&mut self, rng: &mut R) -> Result<(), SetupError> {
        self.board.place_all_ships(rng)
    }

    pub fn board(&self) -> &BoardSetup {
        &self.board
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// One attack cycle: pick a target, resolve it against the board and
    /// feed the result back into the strategy.
    ///
    /// Sunk detection uses the reference proxy: a hit counts as a sink when
    /// every still-unexplored neighbor of the struck cell is water. The
    /// no-touching placement rule makes those neighbors belong to the struck
    /// ship or to the sea, so the proxy fires at the latest when a ship's
    /// last cell is hit, though it can also fire early on branched shapes.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Result<AttackReport, GridError> {
        let (x, y) = self.strategy.next_attack(rng);
        let hit = self.board.tile(x, y)? != 0;
        let mut sunk = hit;
        if hit {
            for (nx, ny) in self.strategy.neighbors(x, y) {
                if self.board.tile(nx, ny)? != 0 {
                    sunk = false;
                    break;
                }
            }
        }
        self.strategy.register_attack(x, y, hit, sunk)?;
        log::debug!(
            "attack on ({}, {}): {}{}",
            x,
            y,
            if hit { "hit" } else { "miss" },
            if sunk { ", sunk" } else { "" }
        );
        Ok(AttackReport { x, y, hit, sunk })
    }

    /// Run attack cycles until the whole fleet is reported sunk or `budget`
    /// shots have been fired.
    pub fn run<R: Rng>(&mut self, rng: &mut R, budget: usize) -> Result<SkirmishSummary, GridError> {
        let mut shots = 0;
        while shots < budget && !self.strategy.all_ships_sunk() {
            self.step(rng)?;
            shots += 1;
        }
        Ok(SkirmishSummary {
            shots,
            all_sunk: self.strategy.all_ships_sunk(),
            stats: self.board.stats(),
        })
    }
}
