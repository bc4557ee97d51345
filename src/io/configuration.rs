//! Tile set conventions and command-line defaults

// Part naming conventions
/// Number of layered slots making up one tile
pub const SLOT_COUNT: usize = 6;
/// Number of leading filename characters forming the biome prefix
pub const PREFIX_LEN: usize = 2;
/// Extensions accepted as part images (compared case-insensitively)
pub const PART_EXTENSIONS: &[&str] = &["png"];

// Output naming
/// Extension of every written tile and sheet
pub const OUTPUT_EXTENSION: &str = "png";
/// Zero-padded width of the bucketed emission counter
pub const BUCKET_COUNTER_WIDTH: usize = 4;
/// Separator between filename components
pub const NAME_SEPARATOR: &str = "_";

// Contact sheet settings
/// Extensions accepted by the sheet merger (compared case-insensitively)
pub const SHEET_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];
/// Default number of columns in a contact sheet
pub const DEFAULT_IMAGES_PER_ROW: u32 = 20;

// Default paths used when none are given on the command line
/// Folder holding the part images
pub const DEFAULT_PARTS_DIR: &str = "tile_parts/Initial";
/// Folder receiving combined tiles
pub const DEFAULT_OUTPUT_DIR: &str = "tile_parts/Final";
/// Contact sheet output file
pub const DEFAULT_MERGE_OUTPUT: &str = "merged_output.png";

// Logging
/// Filter directive used when `RUST_LOG` is unset
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";
/// Filter directive used in quiet mode
pub const QUIET_LOG_DIRECTIVE: &str = "warn";
/// Filter directive used in verbose mode
pub const VERBOSE_LOG_DIRECTIVE: &str = "debug";

/// Whether `file_name` ends in one of `extensions`, ignoring ASCII case
pub fn has_extension(file_name: &str, extensions: &[&str]) -> bool {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}
