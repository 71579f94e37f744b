use std::path::{Path, PathBuf};

use image::RgbaImage;
use image::imageops::{self, FilterType};
use rfd::FileDialog;

use crate::error::{SketchError, SketchResult};
use crate::export::with_png_extension;

/// Raster formats accepted as background images.
pub const BACKGROUND_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

pub const DEFAULT_EXPORT_NAME: &str = "sketch.png";

/// Show the native open dialog for a background image.
pub fn pick_background_image() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Set Image Background")
        .add_filter("Image Files", BACKGROUND_EXTENSIONS)
        .pick_file()
}

/// Show the native save dialog for PNG export. The returned path always ends in `.png`.
pub fn pick_export_path() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Save as PNG")
        .add_filter("PNG Image", &["png"])
        .set_file_name(DEFAULT_EXPORT_NAME)
        .save_file()
        .map(with_png_extension)
}

/// Decode an image file and stretch it to exactly `width` x `height` pixels.
pub fn load_background(path: &Path, width: u32, height: u32) -> SketchResult<RgbaImage> {
    let decoded = image::open(path).map_err(|source| SketchError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "Decoded {}: {}x{}",
        path.display(),
        decoded.width(),
        decoded.height()
    );

    let rgba = decoded.to_rgba8();
    if rgba.dimensions() == (width, height) {
        return Ok(rgba);
    }
    Ok(imageops::resize(&rgba, width, height, FilterType::Triangle))
}
