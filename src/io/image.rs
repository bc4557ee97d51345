//! Image file listing, loading, PNG export and layer pasting

use crate::io::configuration::has_extension;
use crate::io::error::{Result, TileError, WithPath};
use image::{DynamicImage, ImageFormat, RgbaImage};
use png::ColorType;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// List the names of regular files in `dir`, sorted
///
/// Sorting makes listing order reproducible across platforms. Entries with
/// non UTF-8 names are ignored.
///
/// # Errors
///
/// Returns an error if the directory or one of its entries cannot be read
pub fn list_files(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).with_path(dir, "read directory")? {
        let entry = entry.with_path(dir, "read directory entry")?;
        if !entry.path().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// List regular files in `dir` whose extension is in `extensions`, sorted
///
/// # Errors
///
/// Returns an error if the directory or one of its entries cannot be read
pub fn list_image_files(dir: &Path, extensions: &[&str]) -> Result<Vec<String>> {
    let mut names = list_files(dir)?;
    names.retain(|name| has_extension(name, extensions));
    Ok(names)
}

/// Open and decode an image, keeping its native color type
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| TileError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })
}

/// Whether the PNG at `path` stores an alpha channel in its pixel data
///
/// Only the header is read. RGBA and grayscale-alpha count. Palette, gray and
/// RGB images report `false` even when a tRNS chunk makes decoding expand
/// them to RGBA.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its header is not valid PNG
pub fn png_has_alpha_channel(path: &Path) -> Result<bool> {
    let file = File::open(path).with_path(path, "open")?;
    let reader = png::Decoder::new(BufReader::new(file))
        .read_info()
        .map_err(|source| TileError::ImageHeader {
            path: path.to_path_buf(),
            source,
        })?;

    let color_type = reader.info().color_type;
    Ok(matches!(color_type, ColorType::Rgba | ColorType::GrayscaleAlpha))
}

/// Save an RGBA raster as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }
    }

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| TileError::ImageExport {
            path: path.to_path_buf(),
            source,
        })
}

// Rounded (src * a + dst * (255 - a)) / 255
const fn blend_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8
}

/// Paste `layer` at (`x`, `y`) using its own alpha channel as the mask
///
/// Every channel of the destination, alpha included, is blended towards the
/// layer by the layer's alpha. Pixels falling outside the canvas are dropped.
pub fn paste_masked(canvas: &mut RgbaImage, layer: &RgbaImage, x: u32, y: u32) {
    let (canvas_width, canvas_height) = canvas.dimensions();

    for (lx, ly, src) in layer.enumerate_pixels() {
        let (Some(px), Some(py)) = (x.checked_add(lx), y.checked_add(ly)) else {
            continue;
        };
        if px >= canvas_width || py >= canvas_height {
            continue;
        }

        let [.., alpha] = src.0;
        let dst = canvas.get_pixel_mut(px, py);
        for (d, s) in dst.0.iter_mut().zip(src.0) {
            *d = blend_channel(s, *d, alpha);
        }
    }
}

/// Paste `layer` at (`x`, `y`) replacing destination pixels outright
pub fn paste_opaque(canvas: &mut RgbaImage, layer: &RgbaImage, x: u32, y: u32) {
    image::imageops::replace(canvas, layer, i64::from(x), i64::from(y));
}
