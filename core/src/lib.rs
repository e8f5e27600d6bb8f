pub mod cafeteria;
pub mod clearing;
pub mod dial;
pub mod direction;
pub mod gift_shop;
pub mod grid;
pub mod lobby;
pub mod printing;
pub mod puzzle;

pub use clearing::{ClearingReport, clear_all, count_accessible, refresh_neighbors};
pub use direction::Direction;
pub use grid::{Cell, Grid, NeighborSignature, Position};
pub use puzzle::{Answers, Puzzle, PuzzleError};
