#![warn(clippy::all, rust_2018_idioms)]

use pencil_sketch::SketchConfig;

/// Color, width and freehand drawing only.
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    pencil_sketch::run(SketchConfig::basic())
}
