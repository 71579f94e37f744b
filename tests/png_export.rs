use egui::{Color32, Pos2, Vec2};
use image::Rgba;
use pencil_sketch::export::{export_png, render_surface};
use pencil_sketch::{ItemKind, SketchConfig, SketchController, SketchError, Surface};

#[test]
fn empty_canvas_exports_the_background() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.png");

    let mut sketch = SketchController::new(&SketchConfig::full());
    sketch.resize_canvas(Vec2::new(32.0, 24.0));
    sketch.toggle_background();
    export_png(sketch.surface(), &path).unwrap();

    let written = image::open(&path).unwrap().to_rgba8();
    assert_eq!(written.dimensions(), (32, 24));
    assert!(written.pixels().all(|p| *p == Rgba([211, 211, 211, 255])));
}

#[test]
fn drawn_segment_is_visible_in_export() {
    let mut sketch = SketchController::new(&SketchConfig::full());
    sketch.resize_canvas(Vec2::new(50.0, 50.0));
    sketch.choose_color(Some(Color32::from_rgb(0, 0, 255)));
    sketch.pointer_down(Pos2::new(10.0, 25.0));
    sketch.pointer_move(Pos2::new(40.0, 25.0));
    sketch.pointer_up(Pos2::new(40.0, 25.0));

    let image = render_surface(sketch.surface()).unwrap();
    assert_eq!(image.get_pixel(25, 24), &Rgba([0, 0, 255, 255]));
    assert_eq!(image.get_pixel(25, 5), &Rgba([255, 255, 255, 255]));
}

#[test]
fn undone_items_are_not_exported() {
    let mut sketch = SketchController::new(&SketchConfig::full());
    sketch.resize_canvas(Vec2::new(20.0, 20.0));
    sketch.pointer_down(Pos2::new(10.0, 10.0));
    sketch.pointer_up(Pos2::new(10.0, 10.0));
    sketch.undo();

    let image = render_surface(sketch.surface()).unwrap();
    assert!(image.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
}

#[test]
fn background_image_sits_under_items() {
    let mut surface = Surface::new(Vec2::new(10.0, 10.0), Color32::WHITE);
    surface.set_background_image(image::RgbaImage::from_pixel(10, 10, Rgba([0, 128, 0, 255])));
    surface.add_item(
        ItemKind::Line {
            from: Pos2::new(0.0, 5.0),
            to: Pos2::new(10.0, 5.0),
        },
        Color32::BLACK,
        2.0,
    );

    let image = render_surface(&surface).unwrap();
    assert_eq!(image.get_pixel(5, 5), &Rgba([0, 0, 0, 255]));
    assert_eq!(image.get_pixel(5, 0), &Rgba([0, 128, 0, 255]));
}

#[test]
fn unwritable_destination_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("out.png");

    let sketch = SketchController::new(&SketchConfig::full());
    let err = export_png(sketch.surface(), &path).unwrap_err();
    assert!(matches!(err, SketchError::Export { .. }));
}
