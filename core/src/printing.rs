//! Printing Department: clearing paper rolls the forklifts can reach.

use crate::clearing::{clear_all, count_accessible};
use crate::{Answers, Grid};
use log::{Level, debug, log_enabled};

pub fn solve(input: &str) -> Answers {
    let grid = Grid::parse(input);

    let initial = count_accessible(&grid);
    // Part 2 starts again from the untouched grid.
    let mut cleared = grid.clone();
    let total = clear_all(&mut cleared);
    if log_enabled!(Level::Debug) {
        debug!("grid after clearing:\n{}", cleared.render());
    }

    Answers::new(initial as u64, total as u64)
}
