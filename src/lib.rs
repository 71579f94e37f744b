#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod file_handler;
pub mod history;
pub mod input;
pub mod item;
pub mod panels;
pub mod renderer;
pub mod surface;
pub mod tools;

pub use app::SketchApp;
pub use command::Command;
pub use config::{Edition, SketchConfig};
pub use controller::{SketchController, ToolSettings};
pub use error::{SketchError, ToolError};
pub use history::UndoStack;
pub use input::{CanvasEvent, InputHandler};
pub use item::{Item, ItemId, ItemKind};
pub use renderer::Renderer;
pub use surface::Surface;
pub use tools::{PaintSource, Tool, ToolKind};

/// Height reserved below the canvas for the toolbar.
const TOOLBAR_HEIGHT: f32 = 48.0;

/// Open the main window and run the event loop until it closes.
pub fn run(config: SketchConfig) -> eframe::Result {
    let [width, height] = config.canvas_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size([width, height + TOOLBAR_HEIGHT])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };

    log::info!("Starting {} ({:?} edition)", config.title, config.edition);
    let app_name = config.title.clone();
    eframe::run_native(
        &app_name,
        native_options,
        Box::new(move |cc| Ok(Box::new(SketchApp::new(cc, config)))),
    )
}
