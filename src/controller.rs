use egui::{Color32, Pos2, Vec2};
use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::config::SketchConfig;
use crate::error::ToolError;
use crate::history::UndoStack;
use crate::item::{ItemId, ItemKind};
use crate::surface::Surface;
use crate::tools::{PaintSource, Tool, ToolKind, ToolType};

/// Tool preferences restored between sessions. Drawing content is not part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSettings {
    pub tool: ToolKind,
    pub pen_color: [u8; 4],
    pub width: f32,
}

/// Owns the surface, the undo stack and the tool state, and applies
/// pointer input to them.
#[derive(Debug)]
pub struct SketchController {
    surface: Surface,
    history: UndoStack,
    tool_kind: ToolKind,
    active_tool: ToolType,
    pen_color: Color32,
    paint: PaintSource,
    width: f32,
    width_range: (f32, f32),
    backgrounds: [Color32; 2],
}

impl SketchController {
    pub fn new(config: &SketchConfig) -> Self {
        let backgrounds = config.background_colors();
        let [w, h] = config.canvas_size;
        let pen_color = config.pen_color();
        Self {
            surface: Surface::new(Vec2::new(w, h), backgrounds[0]),
            history: UndoStack::new(),
            tool_kind: ToolKind::Pencil,
            active_tool: ToolKind::Pencil.new_instance(),
            pen_color,
            paint: PaintSource::Color(pen_color),
            width: config.default_width,
            width_range: (config.min_width, config.max_width),
            backgrounds,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    pub fn tool(&self) -> ToolKind {
        self.tool_kind
    }

    pub fn pen_color(&self) -> Color32 {
        self.pen_color
    }

    pub fn is_eraser(&self) -> bool {
        self.paint.is_eraser()
    }

    /// The color pencil segments get right now
    pub fn paint_color(&self) -> Color32 {
        self.paint.resolve(self.surface.background_color())
    }

    /// Only pencil segments erase; shapes always use the pen color.
    fn color_for(&self, kind: &ItemKind) -> Color32 {
        match kind {
            ItemKind::Segment { .. } => self.paint_color(),
            ItemKind::Line { .. } | ItemKind::Rectangle { .. } | ItemKind::Ellipse { .. } => {
                self.pen_color
            }
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn width_range(&self) -> (f32, f32) {
        self.width_range
    }

    pub fn is_dragging(&self) -> bool {
        self.active_tool.is_dragging()
    }

    pub fn set_width(&mut self, width: f32) {
        let (min, max) = self.width_range;
        self.width = width.clamp(min, max);
    }

    /// Track the on-screen canvas size; background images and exports use it.
    pub fn resize_canvas(&mut self, size: Vec2) {
        if size != self.surface.size() {
            self.surface.set_size(size);
        }
    }

    /// Switch tools. Refused while a drag is in progress; clears the eraser otherwise.
    pub fn set_tool(&mut self, tool: ToolKind) -> Result<(), ToolError> {
        if self.active_tool.is_dragging() {
            return Err(ToolError::ToolBusy {
                active: self.active_tool.name(),
            });
        }
        if tool != self.tool_kind {
            log::info!("Tool changed: {} -> {}", self.tool_kind.label(), tool.label());
        }
        self.tool_kind = tool;
        self.active_tool = tool.new_instance();
        self.paint = PaintSource::Color(self.pen_color);
        Ok(())
    }

    /// Result of the color picker. `None` means the picker was cancelled.
    pub fn choose_color(&mut self, color: Option<Color32>) {
        if let Some(color) = color {
            self.pen_color = color;
            self.paint = PaintSource::Color(color);
        }
    }

    pub fn toggle_eraser(&mut self) {
        self.paint = match self.paint {
            PaintSource::Color(_) => PaintSource::Background,
            PaintSource::Background => PaintSource::Color(self.pen_color),
        };
        log::debug!("Eraser {}", if self.is_eraser() { "on" } else { "off" });
    }

    pub fn toggle_background(&mut self) {
        let [first, second] = self.backgrounds;
        let next = if self.surface.background_color() == first {
            second
        } else {
            first
        };
        self.surface.set_background_color(next);
    }

    /// Install an image already sized to the canvas as the bottom layer.
    pub fn set_background_image(&mut self, image: RgbaImage) {
        log::info!("Background image set ({}x{})", image.width(), image.height());
        self.surface.set_background_image(image);
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        if let Some(command) = self.active_tool.on_pointer_down(pos) {
            self.apply(command);
        }
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        if let Some(command) = self.active_tool.on_pointer_move(pos) {
            self.apply(command);
        }
    }

    pub fn pointer_up(&mut self, pos: Pos2) {
        let command = self.active_tool.on_pointer_up(pos);
        self.surface.clear_preview();
        if let Some(command) = command {
            self.apply(command);
        }
    }

    /// Remove the most recently committed item. Returns its id, or `None` when there was nothing to undo.
    pub fn undo(&mut self) -> Option<ItemId> {
        let id = self.history.pop()?;
        let removed = self.surface.remove_item(id);
        log::debug!(
            "Undo {} ({} left)",
            removed.as_ref().map_or("missing item", |item| item.kind().name()),
            self.history.len()
        );
        Some(id)
    }

    pub fn clear(&mut self) {
        log::debug!("Clearing {} items", self.surface.items().len());
        self.surface.clear();
        self.history.clear();
    }

    pub fn settings(&self) -> ToolSettings {
        ToolSettings {
            tool: self.tool_kind,
            pen_color: self.pen_color.to_array(),
            width: self.width,
        }
    }

    pub fn apply_settings(&mut self, settings: &ToolSettings) {
        let [r, g, b, a] = settings.pen_color;
        self.pen_color = Color32::from_rgba_premultiplied(r, g, b, a);
        self.set_width(settings.width);
        // Fresh controllers are never mid-drag
        if let Err(err) = self.set_tool(settings.tool) {
            log::warn!("Could not restore tool: {}", err);
        }
    }

    fn apply(&mut self, command: Command) {
        let color = self.color_for(command.kind());
        match command {
            Command::AddItem(kind) => {
                let id = self.surface.add_item(kind, color, self.width);
                self.history.push(id);
            }
            Command::ShowPreview(kind) => {
                self.surface.set_preview(kind, color, self.width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_clamped_to_range() {
        let mut controller = SketchController::new(&SketchConfig::full());
        assert_eq!(controller.width(), 5.0);
        controller.set_width(50.0);
        assert_eq!(controller.width(), 20.0);
        controller.set_width(0.0);
        assert_eq!(controller.width(), 1.0);
    }

    #[test]
    fn settings_survive_a_round_trip() {
        let mut controller = SketchController::new(&SketchConfig::full());
        controller.choose_color(Some(Color32::from_rgb(10, 20, 30)));
        controller.set_width(12.0);
        controller.set_tool(ToolKind::Circle).unwrap();

        let mut restored = SketchController::new(&SketchConfig::full());
        restored.apply_settings(&controller.settings());
        assert_eq!(restored.settings(), controller.settings());
        assert_eq!(restored.paint_color(), Color32::from_rgb(10, 20, 30));
    }

    #[test]
    fn picking_a_tool_turns_the_eraser_off() {
        let mut controller = SketchController::new(&SketchConfig::full());
        controller.toggle_eraser();
        assert!(controller.is_eraser());
        controller.set_tool(ToolKind::Line).unwrap();
        assert!(!controller.is_eraser());
    }

    #[test]
    fn cancelled_color_pick_changes_nothing() {
        let mut controller = SketchController::new(&SketchConfig::full());
        controller.toggle_eraser();
        controller.choose_color(None);
        assert!(controller.is_eraser());
        assert_eq!(controller.pen_color(), Color32::BLACK);
    }
}
