//! Adjacency rule deciding which slot combinations become tiles
//!
//! Two rules over the per-slot biome prefixes:
//! - at most two distinct prefixes
//! - no position may repeat the prefix two slots back while differing from
//!   the prefix directly before it
//!
//! The second rule is applied literally to every window of three slots.

use crate::combination::enumeration::Combination;
use std::collections::BTreeSet;

/// Largest number of distinct biome prefixes a tile may mix
pub const MAX_DISTINCT_PREFIXES: usize = 2;

/// Apply both adjacency rules to a sequence of prefixes
pub fn is_valid_prefix_sequence<T: Ord>(sequence: &[T]) -> bool {
    let distinct: BTreeSet<&T> = sequence.iter().collect();
    if distinct.len() > MAX_DISTINCT_PREFIXES {
        return false;
    }

    !sequence.windows(3).any(|window| {
        matches!(
            window,
            [two_back, previous, current] if current == two_back && current != previous
        )
    })
}

/// Whether `combination` may be rendered
pub fn is_valid_combination(combination: &Combination<'_>) -> bool {
    is_valid_prefix_sequence(&combination.prefixes())
}
