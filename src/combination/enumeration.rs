//! Lazy Cartesian product over the slot groups
//!
//! Iteration runs in odometer order with the last slot varying fastest, so
//! the sequence is lexicographic over the slot groups' listing order.

use crate::combination::filter::is_valid_combination;
use crate::io::configuration::SLOT_COUNT;
use crate::parts::PartName;
use std::collections::BTreeSet;
use std::iter::FusedIterator;

/// One part per slot, slot 1 first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combination<'a> {
    parts: [&'a PartName; SLOT_COUNT],
}

impl<'a> Combination<'a> {
    /// Wrap an ordered selection of parts
    pub const fn new(parts: [&'a PartName; SLOT_COUNT]) -> Self {
        Self { parts }
    }

    /// Parts in paint order
    pub const fn parts(&self) -> &[&'a PartName; SLOT_COUNT] {
        &self.parts
    }

    /// Biome prefix of each slot, position preserved
    pub fn prefixes(&self) -> [&'a str; SLOT_COUNT] {
        self.parts.map(PartName::prefix)
    }

    /// Distinct prefixes touched by this combination, sorted
    pub fn distinct_prefixes(&self) -> BTreeSet<&'a str> {
        self.prefixes().into_iter().collect()
    }

    /// Whether any slot uses `prefix`
    pub fn touches(&self, prefix: &str) -> bool {
        self.parts.iter().any(|part| part.prefix() == prefix)
    }

    /// Whether the combination passes the adjacency filter
    pub fn is_valid(&self) -> bool {
        is_valid_combination(self)
    }
}

/// Restartable iterator over every one-part-per-slot selection
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    groups: [&'a [PartName]; SLOT_COUNT],
    cursor: [usize; SLOT_COUNT],
    remaining: usize,
}

impl<'a> Combinations<'a> {
    /// Start enumerating from the first part of every group
    ///
    /// Any empty group makes the product empty.
    pub fn new(groups: [&'a [PartName]; SLOT_COUNT]) -> Self {
        let remaining = groups
            .iter()
            .try_fold(1usize, |acc, group| acc.checked_mul(group.len()))
            .unwrap_or(usize::MAX);

        Self {
            groups,
            cursor: [0; SLOT_COUNT],
            remaining,
        }
    }

    fn current(&self) -> Option<Combination<'a>> {
        let mut parts = Vec::with_capacity(SLOT_COUNT);
        for (&group, &index) in self.groups.iter().zip(&self.cursor) {
            parts.push(group.get(index)?);
        }
        <[&'a PartName; SLOT_COUNT]>::try_from(parts)
            .ok()
            .map(Combination::new)
    }

    // Odometer step: bump the last slot, carrying into earlier slots
    fn advance(&mut self) {
        for (index, group) in self.cursor.iter_mut().zip(&self.groups).rev() {
            *index += 1;
            if *index < group.len() {
                return;
            }
            *index = 0;
        }
    }
}

impl<'a> Iterator for Combinations<'a> {
    type Item = Combination<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let combination = self.current()?;
        self.remaining -= 1;
        self.advance();
        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Combinations<'_> {}

impl FusedIterator for Combinations<'_> {}
