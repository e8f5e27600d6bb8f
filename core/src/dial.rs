//! Secret Entrance: a safe dial numbered 0 to 99, turned by `L<n>` and `R<n>`.

use crate::Answers;
use log::warn;

pub const DIAL_SIZE: u64 = 100;
pub const START_POSITION: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Left(u64),
    Right(u64),
}

impl Rotation {
    /// Parse an instruction such as `L68` or `r14`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let mut chars = line.chars();
        let turn = chars.next()?;
        let clicks = chars.as_str().trim().parse().ok()?;

        match turn.to_ascii_uppercase() {
            'L' => Some(Rotation::Left(clicks)),
            'R' => Some(Rotation::Right(clicks)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial {
    position: u64,
}

impl Default for Dial {
    fn default() -> Self {
        Self {
            position: START_POSITION,
        }
    }
}

impl Dial {
    pub fn new(position: u64) -> Self {
        Self {
            position: position % DIAL_SIZE,
        }
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    /// Turn the dial and return how many times it pointed at zero along the
    /// way, including where it lands. The starting position is not counted.
    pub fn rotate(&mut self, rotation: Rotation) -> u64 {
        let (clicks, step) = match rotation {
            Rotation::Left(clicks) | Rotation::Right(clicks) => (clicks, clicks % DIAL_SIZE),
        };
        let laps = clicks / DIAL_SIZE;

        // the partial turn passes zero at most once
        let crosses_zero = match rotation {
            Rotation::Left(_) => self.position != 0 && step >= self.position,
            Rotation::Right(_) => self.position + step >= DIAL_SIZE,
        };
        self.position = match rotation {
            Rotation::Left(_) => (self.position + DIAL_SIZE - step) % DIAL_SIZE,
            Rotation::Right(_) => (self.position + step) % DIAL_SIZE,
        };

        laps + u64::from(crosses_zero)
    }
}

pub fn solve(input: &str) -> Answers {
    let mut dial = Dial::default();
    let mut landed_on_zero = 0;
    let mut touched_zero = 0;

    for line in input.lines().filter(|l| !l.trim().is_empty()) {
        let Some(rotation) = Rotation::parse(line) else {
            warn!("skipping malformed rotation instruction: {:?}", line);
            continue;
        };

        touched_zero = dial.rotate(rotation).saturating_add(touched_zero);
        if dial.position() == 0 {
            landed_on_zero += 1;
        }
    }

    Answers::new(landed_on_zero, touched_zero)
}
