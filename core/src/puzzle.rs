use crate::{cafeteria, dial, gift_shop, lobby, printing};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two answers every puzzle produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    pub part1: u64,
    pub part2: u64,
}

impl Answers {
    pub fn new(part1: u64, part2: u64) -> Self {
        Self { part1, part2 }
    }
}

/// Available puzzles, one per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Puzzle {
    SecretEntrance,
    GiftShop,
    Lobby,
    PrintingDepartment,
    Cafeteria,
}

impl Puzzle {
    pub const ALL: [Puzzle; 5] = [
        Puzzle::SecretEntrance,
        Puzzle::GiftShop,
        Puzzle::Lobby,
        Puzzle::PrintingDepartment,
        Puzzle::Cafeteria,
    ];

    pub fn day(&self) -> u8 {
        match self {
            Puzzle::SecretEntrance => 1,
            Puzzle::GiftShop => 2,
            Puzzle::Lobby => 3,
            Puzzle::PrintingDepartment => 4,
            Puzzle::Cafeteria => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Puzzle::SecretEntrance => "Secret Entrance",
            Puzzle::GiftShop => "Gift Shop",
            Puzzle::Lobby => "Lobby",
            Puzzle::PrintingDepartment => "Printing Department",
            Puzzle::Cafeteria => "Cafeteria",
        }
    }

    /// Sentences that introduce the first and second answer.
    pub fn labels(&self) -> (&'static str, &'static str) {
        match self {
            Puzzle::SecretEntrance => (
                "The number of instances where the dial landed on zero is",
                "The number of instances where the dial touched zero is",
            ),
            Puzzle::GiftShop => (
                "The sum of all invalid IDs is",
                "The updated sum of all invalid IDs is",
            ),
            Puzzle::Lobby => (
                "The total output joltage rating is",
                "The total supercharged output joltage rating is",
            ),
            Puzzle::PrintingDepartment => (
                "The initial number of accessible rolls of paper is",
                "The total number of accessible rolls of paper is",
            ),
            Puzzle::Cafeteria => (
                "The total number of fresh items in the inventory is",
                "The total number of possible fresh IDs is",
            ),
        }
    }

    /// File name the puzzle input is expected under, e.g. `day4.txt`.
    pub fn default_input_file(&self) -> String {
        format!("day{}.txt", self.day())
    }

    pub fn solve(&self, input: &str) -> Answers {
        match self {
            Puzzle::SecretEntrance => dial::solve(input),
            Puzzle::GiftShop => gift_shop::solve(input),
            Puzzle::Lobby => lobby::solve(input),
            Puzzle::PrintingDepartment => printing::solve(input),
            Puzzle::Cafeteria => cafeteria::solve(input),
        }
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}: {}", self.day(), self.name())
    }
}

impl TryFrom<u8> for Puzzle {
    type Error = PuzzleError;

    fn try_from(day: u8) -> Result<Self, Self::Error> {
        Puzzle::ALL
            .into_iter()
            .find(|puzzle| puzzle.day() == day)
            .ok_or(PuzzleError::UnknownDay(day))
    }
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    /// Accepts `4`, `day4` or `Day 4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .get(..3)
            .filter(|prefix| prefix.eq_ignore_ascii_case("day"))
            .map_or(trimmed, |_| trimmed[3..].trim_start());

        let day: u8 = digits
            .parse()
            .map_err(|_| PuzzleError::InvalidDay(s.to_string()))?;
        Puzzle::try_from(day)
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("No puzzle for day {0}")]
    UnknownDay(u8),
    #[error("Invalid day: {0:?}")]
    InvalidDay(String),
}
