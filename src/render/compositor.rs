//! Layered compositing of part images into one tile

use crate::combination::Combination;
use crate::io::error::Result;
use crate::io::image::{open_image, paste_masked, paste_opaque, png_has_alpha_channel};
use image::{DynamicImage, Rgba, RgbaImage};
use std::path::Path;

/// Fill of a fresh tile canvas: white at zero alpha
pub const TILE_BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// A decoded part image and how it is pasted
#[derive(Debug, Clone)]
pub struct Layer {
    image: DynamicImage,
    masked: bool,
}

impl Layer {
    /// Pair an image with its paste mode
    ///
    /// A masked layer is pasted through its own alpha. Otherwise it replaces
    /// the pixels it covers with fully opaque ones.
    pub const fn new(image: DynamicImage, masked: bool) -> Self {
        Self { image, masked }
    }

    /// Layer masked exactly when the decoded image carries alpha
    pub fn from_image(image: DynamicImage) -> Self {
        let masked = image.color().has_alpha();
        Self::new(image, masked)
    }

    /// Open a part PNG, masked only when the file stores an alpha channel
    ///
    /// Palette images with a tRNS chunk decode to RGBA but are still painted
    /// opaque.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or decoded
    pub fn open(path: &Path) -> Result<Self> {
        let image = open_image(path)?;
        let masked = png_has_alpha_channel(path)?;
        Ok(Self::new(image, masked))
    }

    /// Decoded pixels
    pub const fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Whether the layer is pasted through its alpha
    pub const fn is_masked(&self) -> bool {
        self.masked
    }

    /// Pixels as pasted: unmasked layers lose any decoded transparency
    pub fn pixels(&self) -> RgbaImage {
        if self.masked {
            self.image.to_rgba8()
        } else {
            DynamicImage::ImageRgb8(self.image.to_rgb8()).to_rgba8()
        }
    }
}

/// Paint `layers` in order onto a canvas sized to the first layer
///
/// Layer sizes are not checked against each other, so larger layers are
/// cropped and smaller ones leave the canvas untouched outside their extent.
pub fn compose_layers(layers: &[Layer]) -> RgbaImage {
    let (width, height) = layers
        .first()
        .map_or((0, 0), |first| (first.image.width(), first.image.height()));
    let mut canvas = RgbaImage::from_pixel(width, height, TILE_BACKGROUND);

    for layer in layers {
        let pixels = layer.pixels();
        if layer.masked {
            paste_masked(&mut canvas, &pixels, 0, 0);
        } else {
            paste_opaque(&mut canvas, &pixels, 0, 0);
        }
    }

    canvas
}

/// Open the parts of `combination` from `parts_dir` and composite them
///
/// # Errors
///
/// Returns an error if any part image cannot be opened or decoded
pub fn render_combination(parts_dir: &Path, combination: &Combination<'_>) -> Result<RgbaImage> {
    let layers = combination
        .parts()
        .iter()
        .map(|part| Layer::open(&parts_dir.join(part.file_name())))
        .collect::<Result<Vec<_>>>()?;

    Ok(compose_layers(&layers))
}
