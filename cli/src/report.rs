//! Rendering of solved puzzles.

use serde::Serialize;
use std::fmt;
use tinsel_core::{Answers, Puzzle};

/// Answers for one puzzle, as printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleReport {
    pub day: u8,
    pub name: &'static str,
    pub part1: u64,
    pub part2: u64,
    #[serde(skip)]
    labels: (&'static str, &'static str),
}

impl PuzzleReport {
    pub fn new(puzzle: Puzzle, answers: Answers) -> Self {
        Self {
            day: puzzle.day(),
            name: puzzle.name(),
            part1: answers.part1,
            part2: answers.part2,
            labels: puzzle.labels(),
        }
    }
}

impl fmt::Display for PuzzleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Day {}: {} ---", self.day, self.name)?;
        writeln!(f, "{} {}", self.labels.0, self.part1)?;
        write!(f, "{} {}", self.labels.1, self.part2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let report = PuzzleReport::new(Puzzle::PrintingDepartment, Answers::new(13, 43));
        assert_eq!(
            report.to_string(),
            "--- Day 4: Printing Department ---\n\
             The initial number of accessible rolls of paper is 13\n\
             The total number of accessible rolls of paper is 43"
        );
    }

    #[test]
    fn test_json_omits_labels() {
        let report = PuzzleReport::new(Puzzle::Cafeteria, Answers::new(3, 14));
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({ "day": 5, "name": "Cafeteria", "part1": 3, "part2": 14 })
        );
    }
}
