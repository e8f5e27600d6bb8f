//! Gift Shop: invalid product IDs are digit sequences repeated over and over.

use crate::Answers;
use log::warn;
use std::ops::RangeInclusive;

/// Parse a comma separated list of `start-end` ranges.
///
/// Entries without a `-` are ignored; entries with unparsable bounds are
/// skipped with a warning.
pub fn parse_ranges(input: &str) -> Vec<RangeInclusive<u64>> {
    input
        .split(',')
        .filter_map(|entry| {
            let (start, end) = entry.trim().split_once('-')?;
            match (start.trim().parse::<u64>(), end.trim().parse::<u64>()) {
                (Ok(start), Ok(end)) => Some(start..=end),
                _ => {
                    warn!("skipping malformed ID range: {:?}", entry);
                    None
                }
            }
        })
        .collect()
}

/// Whether the ID consists of `pattern_len` digits repeated across its whole length.
fn repeats_with_period(digits: &[u8], pattern_len: usize) -> bool {
    digits.len() % pattern_len == 0
        && digits
            .chunks(pattern_len)
            .all(|chunk| chunk == &digits[..pattern_len])
}

/// The ID is some sequence of digits written exactly twice, like `6464`.
pub fn is_doubled(id: u64) -> bool {
    let digits = id.to_string();
    let digits = digits.as_bytes();
    digits.len() % 2 == 0 && repeats_with_period(digits, digits.len() / 2)
}

/// The ID is some sequence of digits written at least twice, like `121212`.
pub fn is_repeating(id: u64) -> bool {
    let digits = id.to_string();
    let digits = digits.as_bytes();
    (1..=digits.len() / 2).any(|pattern_len| repeats_with_period(digits, pattern_len))
}

pub fn solve(input: &str) -> Answers {
    let mut doubled_sum = 0;
    let mut repeating_sum = 0;

    for range in parse_ranges(input) {
        for id in range {
            if is_doubled(id) {
                doubled_sum += id;
            }
            if is_repeating(id) {
                repeating_sum += id;
            }
        }
    }

    Answers::new(doubled_sum, repeating_sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubled_ids() {
        assert!(is_doubled(11));
        assert!(is_doubled(6464));
        assert!(is_doubled(123123));
        assert!(!is_doubled(101));
        assert!(!is_doubled(111));
        assert!(!is_doubled(1234));
    }

    #[test]
    fn test_repeating_ids() {
        assert!(is_repeating(111));
        assert!(is_repeating(121212));
        assert!(is_repeating(824824824));
        assert!(!is_repeating(7));
        assert!(!is_repeating(12123));
        assert!(!is_repeating(1211));
    }

    #[test]
    fn test_parse_ranges_skips_noise() {
        let ranges = parse_ranges("11-22, 95-115\n,junk,a-b");
        assert_eq!(ranges, vec![11..=22, 95..=115]);
    }
}
