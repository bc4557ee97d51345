//! Slot combination enumeration and the adjacency filter

/// Lazy one-part-per-slot enumeration
pub mod enumeration;
/// Prefix adjacency rules
pub mod filter;

pub use enumeration::{Combination, Combinations};
pub use filter::{is_valid_combination, is_valid_prefix_sequence};
