//! Lobby: turning on exactly `k` batteries in each bank to power the escalator.

use crate::Answers;
use log::warn;

/// Batteries switched on per bank for the first answer.
pub const STANDARD_BATTERIES: usize = 2;
/// Batteries switched on per bank once the safety override is engaged.
pub const OVERRIDE_BATTERIES: usize = 12;

/// Parse a bank of single-digit joltage ratings. Returns `None` for any non-digit.
pub fn parse_bank(line: &str) -> Option<Vec<u8>> {
    line.trim()
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect()
}

/// Largest number formed by picking `count` batteries from the bank, keeping
/// their order. `None` if the bank holds fewer than `count` batteries.
///
/// Each pick takes the leftmost maximum among the positions that still leave
/// enough batteries for the remaining picks.
pub fn max_joltage(bank: &[u8], count: usize) -> Option<u64> {
    if count == 0 || bank.len() < count {
        return None;
    }

    let mut joltage = 0u64;
    let mut start = 0;
    for remaining in (0..count).rev() {
        let window = &bank[start..bank.len() - remaining];
        let (offset, &digit) = window
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, &d)| d)?;
        joltage = joltage * 10 + u64::from(digit);
        start += offset + 1;
    }
    Some(joltage)
}

pub fn solve(input: &str) -> Answers {
    let mut standard = 0;
    let mut overridden = 0;

    for line in input.lines().filter(|l| !l.trim().is_empty()) {
        let Some(bank) = parse_bank(line) else {
            warn!("skipping battery bank with non-digit ratings: {:?}", line);
            continue;
        };

        match max_joltage(&bank, STANDARD_BATTERIES) {
            Some(joltage) => standard += joltage,
            None => warn!(
                "battery bank too small for {} batteries: {:?}",
                STANDARD_BATTERIES, line
            ),
        }
        match max_joltage(&bank, OVERRIDE_BATTERIES) {
            Some(joltage) => overridden += joltage,
            None => warn!(
                "battery bank too small for {} batteries: {:?}",
                OVERRIDE_BATTERIES, line
            ),
        }
    }

    Answers::new(standard, overridden)
}
