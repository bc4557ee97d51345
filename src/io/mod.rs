/// Command-line surface and command dispatch
pub mod cli;
/// Tile set conventions and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image listing, loading, saving and pasting
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Progress bars
pub mod progress;
