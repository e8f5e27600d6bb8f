//! Cafeteria: which ingredient IDs fall inside the fresh ranges.

use crate::Answers;
use log::warn;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    /// Sorted, non-overlapping fresh ranges.
    pub fresh: Vec<RangeInclusive<u64>>,
    pub ingredients: Vec<u64>,
}

impl Inventory {
    /// Parse the ranges section and the ingredient section, separated by a blank line.
    pub fn parse(input: &str) -> Self {
        let mut fresh: Vec<RangeInclusive<u64>> = Vec::new();
        let mut ingredients = Vec::new();
        let mut in_ranges = true;

        for line in input.lines().map(str::trim) {
            if line.is_empty() {
                // only the first blank line separates the sections
                if in_ranges && !fresh.is_empty() {
                    in_ranges = false;
                }
                continue;
            }

            if in_ranges {
                match parse_range(line) {
                    Some(range) => fresh.push(range),
                    None => warn!("skipping malformed fresh range: {:?}", line),
                }
            } else {
                match line.parse::<u64>() {
                    Ok(id) => ingredients.push(id),
                    Err(_) => warn!("skipping malformed ingredient ID: {:?}", line),
                }
            }
        }

        Self {
            fresh: merge_ranges(fresh),
            ingredients,
        }
    }

    pub fn is_fresh(&self, id: u64) -> bool {
        // fresh is sorted and disjoint
        let idx = self.fresh.partition_point(|range| *range.end() < id);
        self.fresh.get(idx).is_some_and(|range| range.contains(&id))
    }

    /// Number of listed ingredients that are fresh.
    pub fn fresh_ingredients(&self) -> u64 {
        self.ingredients.iter().filter(|&&id| self.is_fresh(id)).count() as u64
    }

    /// Number of distinct IDs the fresh ranges cover, saturating at `u64::MAX`.
    pub fn fresh_id_count(&self) -> u64 {
        self.fresh
            .iter()
            .map(|range| (range.end() - range.start()).saturating_add(1))
            .fold(0, u64::saturating_add)
    }
}

fn parse_range(line: &str) -> Option<RangeInclusive<u64>> {
    let (start, end) = line.split_once('-')?;
    let start: u64 = start.trim().parse().ok()?;
    let end: u64 = end.trim().parse().ok()?;
    (start <= end).then_some(start..=end)
}

/// Sort ranges and merge any that overlap.
pub fn merge_ranges(mut ranges: Vec<RangeInclusive<u64>>) -> Vec<RangeInclusive<u64>> {
    ranges.sort_by_key(|range| (*range.start(), *range.end()));

    let mut merged: Vec<RangeInclusive<u64>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        if let Some(last) = merged.last_mut() {
            if range.start() <= last.end() {
                let end = (*last.end()).max(*range.end());
                *last = *last.start()..=end;
                continue;
            }
        }
        merged.push(range);
    }
    merged
}

pub fn solve(input: &str) -> Answers {
    let inventory = Inventory::parse(input);
    Answers::new(inventory.fresh_ingredients(), inventory.fresh_id_count())
}
