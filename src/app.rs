use egui::Color32;

use crate::config::{Edition, SketchConfig};
use crate::controller::{SketchController, ToolSettings};
use crate::error::SketchError;
use crate::export;
use crate::file_handler;
use crate::input::{CanvasEvent, InputHandler};
use crate::panels;
use crate::renderer::Renderer;
use crate::tools::ToolKind;

/// Storage key for tool preferences.
const SETTINGS_KEY: &str = "tool_settings";

/// The eframe application: toolbar, canvas and the modal dialogs.
pub struct SketchApp {
    config: SketchConfig,
    controller: SketchController,
    renderer: Renderer,
    input: InputHandler,
    // Pending color while the picker is open
    color_picker: Option<Color32>,
    // Message shown in the error window
    error: Option<String>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        let mut app = Self::with_config(config);
        if let Some(storage) = cc.storage {
            if let Some(settings) = eframe::get_value::<ToolSettings>(storage, SETTINGS_KEY) {
                app.restore_settings(&settings);
            }
        }
        app
    }

    /// Build the app without a window, e.g. for tests.
    pub fn with_config(config: SketchConfig) -> Self {
        Self {
            controller: SketchController::new(&config),
            config,
            renderer: Renderer::new(),
            input: InputHandler::new(),
            color_picker: None,
            error: None,
        }
    }

    pub fn edition(&self) -> Edition {
        self.config.edition
    }

    pub fn controller(&self) -> &SketchController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SketchController {
        &mut self.controller
    }

    pub(crate) fn renderer_and_controller(&mut self) -> (&mut Renderer, &SketchController) {
        (&mut self.renderer, &self.controller)
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    /// True while a dialog owns the input, so the canvas ignores the pointer.
    pub fn is_modal_open(&self) -> bool {
        self.color_picker.is_some() || self.error.is_some()
    }

    pub fn open_color_picker(&mut self) {
        self.color_picker = Some(self.controller.pen_color());
    }

    pub(crate) fn color_picker_mut(&mut self) -> Option<&mut Color32> {
        self.color_picker.as_mut()
    }

    /// Close the picker. `confirmed` decides whether the chosen color is applied.
    pub fn close_color_picker(&mut self, confirmed: bool) {
        let chosen = self.color_picker.take().filter(|_| confirmed);
        self.controller.choose_color(chosen);
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn show_error(&mut self, err: &SketchError) {
        log::error!("{}", err);
        self.error = Some(err.to_string());
    }

    pub fn select_tool(&mut self, tool: ToolKind) {
        if let Err(err) = self.controller.set_tool(tool) {
            log::warn!("{}", err);
        }
    }

    /// Ask for an image file and install it as the background.
    pub fn choose_background_image(&mut self) {
        let Some(path) = file_handler::pick_background_image() else {
            return;
        };
        let (width, height) = export::pixel_size(self.controller.surface());
        match file_handler::load_background(&path, width, height) {
            Ok(image) => self.controller.set_background_image(image),
            Err(err) => self.show_error(&err),
        }
    }

    /// Ask for a destination and export the canvas as PNG.
    pub fn save_as_png(&mut self) {
        let Some(path) = file_handler::pick_export_path() else {
            return;
        };
        if let Err(err) = export::export_png(self.controller.surface(), &path) {
            self.show_error(&err);
        }
    }

    /// Apply canvas input in the order it happened.
    pub fn handle_canvas_events(&mut self, events: &[CanvasEvent]) {
        for event in events {
            match *event {
                CanvasEvent::PointerDown { position } => self.controller.pointer_down(position),
                CanvasEvent::PointerMove { position } => self.controller.pointer_move(position),
                CanvasEvent::PointerUp { position } => self.controller.pointer_up(position),
                CanvasEvent::Undo => {
                    if self.edition().has_undo() {
                        self.controller.undo();
                    }
                }
            }
        }
    }

    fn restore_settings(&mut self, settings: &ToolSettings) {
        let mut settings = settings.clone();
        if !self.edition().has_shapes() {
            settings.tool = ToolKind::Pencil;
        }
        self.controller.apply_settings(&settings);
    }
}

impl eframe::App for SketchApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SETTINGS_KEY, &self.controller.settings());
    }

    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::toolbar(self, ctx);
        panels::central_panel(self, ctx);
        panels::dialogs(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Pos2;

    #[test]
    fn basic_edition_ignores_undo_shortcut() {
        let mut app = SketchApp::with_config(SketchConfig::basic());
        app.handle_canvas_events(&[
            CanvasEvent::PointerDown {
                position: Pos2::new(1.0, 1.0),
            },
            CanvasEvent::PointerUp {
                position: Pos2::new(1.0, 1.0),
            },
            CanvasEvent::Undo,
        ]);
        assert_eq!(app.controller().surface().items().len(), 1);
    }

    #[test]
    fn color_picker_applies_only_on_confirm() {
        let mut app = SketchApp::with_config(SketchConfig::full());
        app.open_color_picker();
        assert!(app.is_modal_open());
        if let Some(color) = app.color_picker_mut() {
            *color = Color32::RED;
        }
        app.close_color_picker(false);
        assert_eq!(app.controller().pen_color(), Color32::BLACK);

        app.open_color_picker();
        if let Some(color) = app.color_picker_mut() {
            *color = Color32::RED;
        }
        app.close_color_picker(true);
        assert_eq!(app.controller().pen_color(), Color32::RED);
        assert!(!app.is_modal_open());
    }

    #[test]
    fn errors_block_the_canvas_until_dismissed() {
        let mut app = SketchApp::with_config(SketchConfig::full());
        app.show_error(&SketchError::EmptyCanvas);
        assert_eq!(app.error_message(), Some("Canvas has no area to export"));
        assert!(app.is_modal_open());
        app.dismiss_error();
        assert!(!app.is_modal_open());
    }
}
