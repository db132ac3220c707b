use std::ops::RangeInclusive;

use crate::errors::errors::{Error, ErrorImpl};

pub type CharSetId = usize;

/// A set of characters stored as sorted, disjoint, non-adjacent ranges.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharSet {
    ranges: Vec<RangeInclusive<char>>,
}

impl CharSet {
    pub fn new<I>(ranges: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = RangeInclusive<char>>,
    {
        let ranges: Vec<RangeInclusive<char>> = ranges.into_iter().collect();

        if let Some(empty) = ranges.iter().find(|range| range.is_empty()) {
            return Err(ErrorImpl::EmptyCharRange {
                start: *empty.start(),
                end: *empty.end(),
            }
            .into());
        }

        Ok(CharSet {
            ranges: normalize(ranges),
        })
    }

    pub fn from_chars(chars: &str) -> Self {
        CharSet {
            ranges: normalize(chars.chars().map(|c| c..=c).collect()),
        }
    }

    pub fn contains(&self, ch: char) -> bool {
        self.ranges
            .binary_search_by(|range| {
                if *range.end() < ch {
                    std::cmp::Ordering::Less
                } else if *range.start() > ch {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    pub fn ranges(&self) -> &[RangeInclusive<char>] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

fn normalize(mut ranges: Vec<RangeInclusive<char>>) -> Vec<RangeInclusive<char>> {
    ranges.sort_by_key(|range| *range.start());

    let mut merged: Vec<RangeInclusive<char>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if touches(last, &range) => {
                if range.end() > last.end() {
                    *last = *last.start()..=*range.end();
                }
            }
            _ => merged.push(range),
        }
    }

    merged
}

// Overlapping or directly adjacent, e.g. 'a'..='c' and 'd'..='f'.
fn touches(left: &RangeInclusive<char>, right: &RangeInclusive<char>) -> bool {
    let next = (*left.end() as u32).saturating_add(1);
    (*right.start() as u32) <= next
}
