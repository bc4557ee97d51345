//! Tile rendering: compositing, output naming and the write loop

/// Emission loop writing tiles to disk
pub mod combiner;
/// Layer compositing
pub mod compositor;
/// Flat and bucketed naming strategies
pub mod naming;

pub use combiner::{CombineSummary, TileCombiner};
pub use naming::{Emission, NamingMode};
