//! Re-renders the retained surface into a pixel buffer and writes it as PNG.
//!
//! Coverage is computed per pixel from the distance to each item's centre
//! line, with a one pixel anti-aliased edge.

use std::path::{Path, PathBuf};

use egui::{Color32, Pos2};
use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::{SketchError, SketchResult};
use crate::item::Item;
use crate::surface::Surface;

/// Pixel dimensions of the surface, rounded to whole pixels.
pub fn pixel_size(surface: &Surface) -> (u32, u32) {
    let size = surface.size();
    (size.x.round().max(0.0) as u32, size.y.round().max(0.0) as u32)
}

/// Render background, background image and items bottom to top.
pub fn render_surface(surface: &Surface) -> SketchResult<RgbaImage> {
    let (width, height) = pixel_size(surface);
    if width == 0 || height == 0 {
        return Err(SketchError::EmptyCanvas);
    }

    let [r, g, b, a] = surface.background_color().to_srgba_unmultiplied();
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([r, g, b, a]));

    if let Some(background) = surface.background_image() {
        let pixels = background.pixels();
        if pixels.dimensions() == (width, height) {
            imageops::overlay(&mut canvas, pixels, 0, 0);
        } else {
            // Canvas was resized since the image was loaded
            let resized = imageops::resize(pixels, width, height, FilterType::Triangle);
            imageops::overlay(&mut canvas, &resized, 0, 0);
        }
    }

    for item in surface.items() {
        rasterize_item(&mut canvas, item);
    }

    Ok(canvas)
}

/// Render the surface and write it to `path` as PNG.
pub fn export_png(surface: &Surface, path: &Path) -> SketchResult<()> {
    let canvas = render_surface(surface)?;
    canvas
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| SketchError::Export {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("Image saved to {}", path.display());
    Ok(())
}

/// Append `.png` unless the file name already ends in it.
pub fn with_png_extension(path: PathBuf) -> PathBuf {
    let has_png = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if has_png {
        path
    } else {
        let mut name = path.into_os_string();
        name.push(".png");
        PathBuf::from(name)
    }
}

fn rasterize_item(canvas: &mut RgbaImage, item: &Item) {
    let (canvas_w, canvas_h) = canvas.dimensions();
    let bounds = item.rect().expand(1.0);

    let x0 = (bounds.min.x.floor() as i64).max(0);
    let y0 = (bounds.min.y.floor() as i64).max(0);
    let x1 = (bounds.max.x.ceil() as i64).min(canvas_w as i64);
    let y1 = (bounds.max.y.ceil() as i64).min(canvas_h as i64);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let outline = item.outline();
    let half_width = (item.width() / 2.0).max(0.5);
    let color = item.color();

    for y in y0..y1 {
        for x in x0..x1 {
            let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
            let distance = outline.distance_to(center);
            let coverage = (half_width + 0.5 - distance).clamp(0.0, 1.0);
            if coverage > 0.0 {
                blend(canvas.get_pixel_mut(x as u32, y as u32), color, coverage);
            }
        }
    }
}

/// Source-over blend of `color` at `coverage` onto `dst`.
fn blend(dst: &mut Rgba<u8>, color: Color32, coverage: f32) {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let alpha = coverage * a as f32 / 255.0;
    let mix = |src: u8, dst: u8| -> u8 {
        (src as f32 * alpha + dst as f32 * (1.0 - alpha)).round() as u8
    };
    let out_alpha = alpha + dst[3] as f32 / 255.0 * (1.0 - alpha);
    *dst = Rgba([
        mix(r, dst[0]),
        mix(g, dst[1]),
        mix(b, dst[2]),
        (out_alpha * 255.0).round() as u8,
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemKind;
    use egui::Vec2;

    #[test]
    fn empty_canvas_is_an_error() {
        let surface = Surface::new(Vec2::ZERO, Color32::WHITE);
        assert!(matches!(render_surface(&surface), Err(SketchError::EmptyCanvas)));
    }

    #[test]
    fn rectangle_outline_leaves_the_inside_untouched() {
        let mut surface = Surface::new(Vec2::new(40.0, 40.0), Color32::WHITE);
        surface.add_item(
            ItemKind::Rectangle {
                from: Pos2::new(5.0, 5.0),
                to: Pos2::new(35.0, 35.0),
            },
            Color32::BLACK,
            2.0,
        );
        let image = render_surface(&surface).unwrap();
        assert_eq!(image.get_pixel(5, 20), &Rgba([0, 0, 0, 255]));
        assert_eq!(image.get_pixel(20, 20), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn items_outside_the_canvas_are_skipped() {
        let mut surface = Surface::new(Vec2::new(10.0, 10.0), Color32::WHITE);
        surface.add_item(
            ItemKind::Segment {
                from: Pos2::new(-50.0, -50.0),
                to: Pos2::new(-40.0, -40.0),
            },
            Color32::BLACK,
            3.0,
        );
        let image = render_surface(&surface).unwrap();
        assert!(image.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn png_extension_is_appended_once() {
        assert_eq!(
            with_png_extension(PathBuf::from("out/sketch")),
            PathBuf::from("out/sketch.png")
        );
        assert_eq!(
            with_png_extension(PathBuf::from("sketch.PNG")),
            PathBuf::from("sketch.PNG")
        );
        assert_eq!(
            with_png_extension(PathBuf::from("sketch.jpg")),
            PathBuf::from("sketch.jpg.png")
        );
    }
}
