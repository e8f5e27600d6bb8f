use crate::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Character that marks an occupied position in puzzle input.
pub const PAPER_ROLL: char = '@';

/// A (row, column) coordinate. Rows grow downwards, columns to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i64,
    pub col: i64,
}

impl Position {
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// The adjacent position in `direction`. It may lie outside any grid.
    pub fn neighbor(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

/// Occupancy of the eight positions around a cell, one flag per [`Direction`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborSignature {
    flags: [bool; 8],
}

impl NeighborSignature {
    pub fn get(&self, direction: Direction) -> bool {
        self.flags[direction.index()]
    }

    pub fn set(&mut self, direction: Direction, occupied: bool) {
        self.flags[direction.index()] = occupied;
    }

    /// Number of occupied neighbors.
    pub fn blocked_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// Directions whose neighbor is occupied, clockwise from north.
    pub fn blocked(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|&d| self.get(d))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    pub occupied: bool,
    /// Derived from the grid; only meaningful right after a neighbor refresh.
    pub neighbors: NeighborSignature,
}

impl Cell {
    pub fn new(position: Position, occupied: bool) -> Self {
        Self {
            position,
            occupied,
            neighbors: NeighborSignature::default(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn get_display_char(&self) -> char {
        if self.occupied { PAPER_ROLL } else { '.' }
    }
}

/// Sparse occupancy grid: row index to column index to [`Cell`].
///
/// Only positions that appeared in the input exist. Lookups of any other
/// position report "not occupied" rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: HashMap<i64, HashMap<i64, Cell>>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid with one cell per character, row by row.
    ///
    /// Rows may have different lengths; an empty iterator gives an empty grid.
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grid = Self::new();
        for (row, line) in rows.into_iter().enumerate() {
            for (col, ch) in line.as_ref().chars().enumerate() {
                let position = Position::new(row as i64, col as i64);
                grid.insert(Cell::new(position, ch == PAPER_ROLL));
            }
        }
        grid
    }

    /// Build a grid from raw puzzle text, one row per line.
    pub fn parse(text: &str) -> Self {
        Self::from_rows(text.lines())
    }

    /// Insert a cell, replacing any cell already at its position.
    pub fn insert(&mut self, cell: Cell) {
        let Position { row, col } = cell.position;
        self.rows.entry(row).or_default().insert(col, cell);
    }

    pub fn get_cell(&self, position: Position) -> Option<&Cell> {
        self.rows.get(&position.row)?.get(&position.col)
    }

    pub fn get_cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.rows.get_mut(&position.row)?.get_mut(&position.col)
    }

    /// Occupancy at `position`; positions without a cell are unoccupied.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.get_cell(position).is_some_and(|cell| cell.occupied)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.values().flat_map(|columns| columns.values())
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.rows.values_mut().flat_map(|columns| columns.values_mut())
    }

    /// Total number of cells, occupied or not.
    pub fn len(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn occupied_count(&self) -> usize {
        self.cells().filter(|cell| cell.occupied).count()
    }

    /// Render the grid back to text. Ragged rows are rendered as they are.
    pub fn render(&self) -> String {
        let mut row_keys: Vec<_> = self.rows.keys().copied().collect();
        row_keys.sort_unstable();

        let mut output = String::new();
        for row in row_keys {
            let columns = &self.rows[&row];
            let mut col_keys: Vec<_> = columns.keys().copied().collect();
            col_keys.sort_unstable();
            for col in col_keys {
                output.push(columns[&col].get_display_char());
            }
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ragged_rows_create_only_present_cells() {
        let grid = Grid::from_rows(["@@@@", "@@", "@@@"]);
        assert_eq!(grid.len(), 9);
        assert!(grid.get_cell(Position::new(1, 1)).is_some());
        assert!(grid.get_cell(Position::new(1, 2)).is_none());
        assert!(!grid.is_occupied(Position::new(1, 2)));
    }

    #[test]
    fn test_missing_positions_are_unoccupied() {
        let grid = Grid::parse("@");
        assert!(grid.is_occupied(Position::new(0, 0)));
        assert!(!grid.is_occupied(Position::new(-1, -1)));
        assert!(!grid.is_occupied(Position::new(0, 1)));
        assert!(!grid.is_occupied(Position::new(100, 0)));
    }

    #[test]
    fn test_empty_input_gives_empty_grid() {
        assert!(Grid::parse("").is_empty());
        assert!(Grid::from_rows(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_render_round_trips_rectangular_input() {
        let text = "..@\n@.@\n";
        assert_eq!(Grid::parse(text).render(), text);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut grid = Grid::parse("@");
        grid.insert(Cell::new(Position::new(0, 0), false));
        assert_eq!(grid.len(), 1);
        assert!(!grid.is_occupied(Position::new(0, 0)));
    }
}
