//! Layered tile generation for 2D tile sets
//!
//! Part images named `<PREFIX><SLOT>...` are grouped into six slots, every
//! one-part-per-slot combination is checked against a biome adjacency rule,
//! and valid combinations are composited into tiles. A separate merger lays
//! out any folder of images as a grid contact sheet.

#![forbid(unsafe_code)]

/// Slot combination enumeration and the adjacency filter
pub mod combination;
/// Command line, configuration, errors, image plumbing, logging and progress
pub mod io;
/// Part filename parsing and catalog building
pub mod parts;
/// Tile compositing, naming and writing
pub mod render;
/// Contact sheet layout and merging
pub mod sheet;

pub use io::error::{Result, TileError};
