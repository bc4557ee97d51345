//! Part discovery and classification
//!
//! Parts are individual layer images whose file names carry a biome prefix
//! and a slot digit. Nothing in this module opens image contents.

/// Part folder scanning, slot grouping and prefix indexing
pub mod catalog;
/// Part filename parsing and rejection kinds
pub mod name;

pub use catalog::PartCatalog;
pub use name::{PartName, PartNameError};
