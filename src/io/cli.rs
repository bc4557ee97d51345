//! Command-line interface for tile combining and sheet merging

use crate::io::configuration::{
    DEFAULT_IMAGES_PER_ROW, DEFAULT_MERGE_OUTPUT, DEFAULT_OUTPUT_DIR, DEFAULT_PARTS_DIR,
};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::render::{CombineSummary, NamingMode, TileCombiner};
use crate::sheet::{MergeOutcome, SheetMerger};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tilestack")]
#[command(
    author,
    version,
    about = "Compose layered tile parts into tiles and contact sheets"
)]
/// Command-line arguments for the tile tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output and informational logs
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log every written tile
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available operations
#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Render every valid part combination into a layered tile
    Combine {
        /// Folder holding part images named `<PREFIX><SLOT>...png`
        #[arg(value_name = "PARTS_DIR", default_value = DEFAULT_PARTS_DIR)]
        parts: PathBuf,

        /// Folder receiving combined tiles (created if missing)
        #[arg(value_name = "OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Output naming strategy
        #[arg(short, long, value_enum, default_value_t = NamingMode::Flat)]
        mode: NamingMode,
    },

    /// Arrange a folder of images into a grid contact sheet
    Merge {
        /// Folder holding the images to arrange
        #[arg(value_name = "INPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
        input: PathBuf,

        /// Sheet file to write
        #[arg(value_name = "OUTPUT_FILE", default_value = DEFAULT_MERGE_OUTPUT)]
        output: PathBuf,

        /// Images per row
        #[arg(short, long, default_value_t = DEFAULT_IMAGES_PER_ROW)]
        columns: u32,
    },
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Dispatches the parsed command with optional progress display
pub struct CommandRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails, see [`TileCombiner::run`] and
    /// [`SheetMerger::merge`]
    pub fn run(&mut self) -> Result<()> {
        match self.cli.command.clone() {
            Command::Combine {
                parts,
                output,
                mode,
            } => self.combine(&parts, &output, mode).map(|_| ()),
            Command::Merge {
                input,
                output,
                columns,
            } => self.merge(&input, &output, columns).map(|_| ()),
        }
    }

    fn combine(&mut self, parts: &Path, output: &Path, mode: NamingMode) -> Result<CombineSummary> {
        TileCombiner::new(parts, output, mode).run(self.progress_manager.as_mut())
    }

    // Allow print for reporting the merge outcome
    #[allow(clippy::print_stdout)]
    fn merge(&self, input: &Path, output: &Path, columns: u32) -> Result<MergeOutcome> {
        let outcome = SheetMerger::new(columns)?.merge(input, output)?;

        if !self.cli.quiet {
            match &outcome {
                MergeOutcome::Written { path, .. } => {
                    println!("Merged image saved as {}", path.display());
                }
                MergeOutcome::NoImages => println!("No images found in the folder."),
            }
        }

        Ok(outcome)
    }
}
