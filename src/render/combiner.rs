//! Emission loop turning valid combinations into PNG tiles

use crate::io::error::{Result, WithPath};
use crate::io::image::save_png;
use crate::io::progress::ProgressManager;
use crate::parts::PartCatalog;
use crate::render::compositor::render_combination;
use crate::render::naming::NamingMode;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Counts reported after a combine run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CombineSummary {
    /// Accepted part files
    pub parts: usize,
    /// Files in the parts folder that were not accepted as parts
    pub rejected: usize,
    /// Size of the unfiltered slot product
    pub combinations: usize,
    /// Combinations passing the adjacency filter
    pub valid: usize,
    /// Tiles written to the output folder
    pub written: usize,
}

/// Renders every planned emission from a parts folder into an output folder
#[derive(Debug, Clone)]
pub struct TileCombiner {
    parts_dir: PathBuf,
    output_dir: PathBuf,
    mode: NamingMode,
}

impl TileCombiner {
    /// Create a combiner reading from `parts_dir` and writing to `output_dir`
    pub fn new(
        parts_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        mode: NamingMode,
    ) -> Self {
        Self {
            parts_dir: parts_dir.into(),
            output_dir: output_dir.into(),
            mode,
        }
    }

    /// Folder the part images are read from
    pub fn parts_dir(&self) -> &Path {
        &self.parts_dir
    }

    /// Folder the tiles are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Naming strategy in use
    pub const fn mode(&self) -> NamingMode {
        self.mode
    }

    /// Scan the parts folder and write every tile
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parts folder cannot be read
    /// - The output folder cannot be created
    /// - A part image cannot be loaded or a tile cannot be saved
    pub fn run(&self, progress: Option<&mut ProgressManager>) -> Result<CombineSummary> {
        let catalog = PartCatalog::load(&self.parts_dir)?;
        self.run_catalog(&catalog, progress)
    }

    /// Write every tile planned for an already built catalog
    ///
    /// Stale files already in the output folder are left alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the output folder cannot be created, a part image
    /// cannot be loaded, or a tile cannot be saved
    pub fn run_catalog(
        &self,
        catalog: &PartCatalog,
        mut progress: Option<&mut ProgressManager>,
    ) -> Result<CombineSummary> {
        std::fs::create_dir_all(&self.output_dir)
            .with_path(&self.output_dir, "create directory")?;

        let mut summary = CombineSummary {
            parts: catalog.part_count(),
            rejected: catalog.rejected().len(),
            combinations: catalog.combination_count(),
            valid: catalog.valid_combinations().count(),
            written: 0,
        };

        if let Some(pm) = progress.as_mut() {
            pm.initialize(self.mode.plan(catalog).count());
        }

        for emission in self.mode.plan(catalog) {
            let tile = render_combination(&self.parts_dir, &emission.combination)?;
            save_png(&tile, &self.output_dir.join(&emission.file_name))?;
            summary.written += 1;

            debug!(
                sequence = emission.sequence,
                bucket = emission.bucket.unwrap_or("-"),
                file = %emission.file_name,
                "wrote tile"
            );
            if let Some(pm) = progress.as_mut() {
                pm.record_emission(&emission.file_name);
            }
        }

        if let Some(pm) = progress.as_ref() {
            pm.finish();
        }

        info!(
            parts = summary.parts,
            rejected = summary.rejected,
            combinations = summary.combinations,
            valid = summary.valid,
            written = summary.written,
            output = %self.output_dir.display(),
            "combine finished"
        );

        Ok(summary)
    }
}
