//! Iterative clearing of accessible paper rolls.
//!
//! A pass is split into three phases so that occupancy is never read and
//! written at the same time:
//!
//! 1. [`signatures`] snapshots every cell's neighbor occupancy,
//! 2. [`accessible`] filters the cells that may be cleared,
//! 3. [`commit`] flips those cells to unoccupied.
//!
//! Every removal in a pass is therefore decided against the occupancy as it
//! stood when the pass began.

use crate::{Direction, Grid, NeighborSignature, Position};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A cell with this many occupied neighbors or more is blocked in.
pub const BLOCKED_THRESHOLD: usize = 4;

/// Neighbor occupancy of every cell, keyed by position.
pub type Signatures = HashMap<Position, NeighborSignature>;

/// Outcome of [`clear_all_report`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearingReport {
    /// Cells cleared by each pass, in order. The final pass that cleared
    /// nothing is not recorded.
    pub passes: Vec<usize>,
    /// Cumulative number of cells cleared.
    pub total: usize,
}

/// Whether a cell with this occupancy and neighbor signature can be cleared.
pub fn is_accessible(occupied: bool, neighbors: &NeighborSignature) -> bool {
    occupied && neighbors.blocked_count() < BLOCKED_THRESHOLD
}

/// Compute the neighbor signature of a single position from current occupancy.
pub fn signature_at(grid: &Grid, position: Position) -> NeighborSignature {
    let mut signature = NeighborSignature::default();
    for direction in Direction::ALL {
        signature.set(direction, grid.is_occupied(position.neighbor(direction)));
    }
    signature
}

/// Snapshot the neighbor signature of every cell. Does not touch the grid.
pub fn signatures(grid: &Grid) -> Signatures {
    grid.cells()
        .map(|cell| (cell.position(), signature_at(grid, cell.position())))
        .collect()
}

/// Recompute and store the neighbor flags of every cell.
///
/// All signatures are taken from one snapshot before any cell is updated.
pub fn refresh_neighbors(grid: &mut Grid) {
    let snapshot = signatures(grid);
    for cell in grid.cells_mut() {
        if let Some(signature) = snapshot.get(&cell.position()) {
            cell.neighbors = *signature;
        }
    }
}

/// Positions of cells that are accessible according to their stored flags.
///
/// Call [`refresh_neighbors`] first; the flags are not recomputed here.
pub fn accessible(grid: &Grid) -> Vec<Position> {
    grid.cells()
        .filter(|cell| is_accessible(cell.occupied, &cell.neighbors))
        .map(|cell| cell.position())
        .collect()
}

/// Mark every listed position unoccupied, returning how many cells flipped.
pub fn commit(grid: &mut Grid, positions: &[Position]) -> usize {
    let mut cleared = 0;
    for &position in positions {
        if let Some(cell) = grid.get_cell_mut(position) {
            if cell.occupied {
                cell.occupied = false;
                cleared += 1;
            }
        }
    }
    cleared
}

/// Number of cells accessible in the grid as it stands.
///
/// Works on a fresh snapshot, so neither occupancy nor stored flags change.
pub fn count_accessible(grid: &Grid) -> usize {
    let snapshot = signatures(grid);
    grid.cells()
        .filter(|cell| {
            snapshot
                .get(&cell.position())
                .is_some_and(|signature| is_accessible(cell.occupied, signature))
        })
        .count()
}

/// Run a single pass: refresh, filter, commit. Returns the number cleared.
pub fn clear_pass(grid: &mut Grid) -> usize {
    refresh_neighbors(grid);
    let positions = accessible(grid);
    commit(grid, &positions)
}

/// Clear accessible cells pass after pass until a pass clears nothing.
pub fn clear_all_report(grid: &mut Grid) -> ClearingReport {
    let mut report = ClearingReport::default();
    if grid.is_empty() {
        return report;
    }

    loop {
        let cleared = clear_pass(grid);
        if cleared == 0 {
            break;
        }
        report.total += cleared;
        report.passes.push(cleared);
        debug!(
            "clearing pass {} removed {} cells ({} total)",
            report.passes.len(),
            cleared,
            report.total
        );
    }

    report
}

/// Cumulative number of cells cleared before the grid reaches a fixed point.
pub fn clear_all(grid: &mut Grid) -> usize {
    clear_all_report(grid).total
}
