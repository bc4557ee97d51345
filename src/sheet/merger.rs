//! Contact sheet assembly from a folder of images

use crate::io::configuration::SHEET_EXTENSIONS;
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{list_image_files, open_image, paste_masked, save_png};
use crate::sheet::layout::SheetLayout;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Result of a merge request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The sheet was written
    Written {
        /// Where the sheet was saved
        path: PathBuf,
        /// Number of images placed
        images: usize,
        /// Grid used for placement
        layout: SheetLayout,
    },
    /// The input folder held no recognized images; nothing was written
    NoImages,
}

/// Arranges images into a fixed-column grid
#[derive(Debug, Clone, Copy)]
pub struct SheetMerger {
    columns: u32,
}

impl SheetMerger {
    /// Create a merger placing `columns` images per row
    ///
    /// # Errors
    ///
    /// Returns an error if `columns` is zero
    pub fn new(columns: u32) -> Result<Self> {
        if columns == 0 {
            return Err(invalid_parameter(
                "columns",
                &columns,
                &"at least one column is required",
            ));
        }
        Ok(Self { columns })
    }

    /// Images per row
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Paste `images` in order onto a transparent grid canvas
    ///
    /// Returns `None` for an empty input.
    pub fn compose(&self, images: &[RgbaImage]) -> Option<(RgbaImage, SheetLayout)> {
        let dimensions: Vec<_> = images.iter().map(RgbaImage::dimensions).collect();
        let layout = SheetLayout::compute(&dimensions, self.columns)?;

        let (width, height) = layout.canvas_size();
        let mut canvas = RgbaImage::new(width, height);

        for (index, image) in (0u32..).zip(images) {
            let (x, y) = layout.cell_origin(index);
            paste_masked(&mut canvas, image, x, y);
        }

        Some((canvas, layout))
    }

    /// Merge every recognized image in `input_dir` into one PNG at `output_path`
    ///
    /// Images are placed in file name order. All of them are held in memory
    /// until the sheet is written.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input folder cannot be read
    /// - An image cannot be loaded
    /// - The sheet cannot be saved
    pub fn merge(&self, input_dir: &Path, output_path: &Path) -> Result<MergeOutcome> {
        let names = list_image_files(input_dir, SHEET_EXTENSIONS)?;

        let images = names
            .iter()
            .map(|name| open_image(&input_dir.join(name)).map(|image| image.to_rgba8()))
            .collect::<Result<Vec<_>>>()?;
        debug!(dir = %input_dir.display(), images = images.len(), "loaded sheet images");

        let Some((sheet, layout)) = self.compose(&images) else {
            warn!(dir = %input_dir.display(), "no images found");
            return Ok(MergeOutcome::NoImages);
        };

        save_png(&sheet, output_path)?;

        let (width, height) = layout.canvas_size();
        info!(
            images = images.len(),
            columns = layout.columns(),
            rows = layout.rows(),
            width,
            height,
            output = %output_path.display(),
            "sheet written"
        );

        Ok(MergeOutcome::Written {
            path: output_path.to_path_buf(),
            images: images.len(),
            layout,
        })
    }
}
