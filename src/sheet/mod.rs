//! Contact sheets: many images arranged in one uniform grid

/// Grid geometry
pub mod layout;
/// Folder to sheet merging
pub mod merger;

pub use layout::SheetLayout;
pub use merger::{MergeOutcome, SheetMerger};
