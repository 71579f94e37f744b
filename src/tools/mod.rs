use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::command::Command;

mod pencil_tool;
pub use pencil_tool::PencilTool;

mod shape_tool;
pub use shape_tool::{ShapeKind, ShapeTool};

/// Tool interface for turning pointer input into surface commands.
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// True between a pointer press and the matching release.
    fn is_dragging(&self) -> bool;

    /// Handle primary-button press on the canvas.
    fn on_pointer_down(&mut self, pos: Pos2) -> Option<Command>;

    /// Handle pointer movement while the button is held.
    fn on_pointer_move(&mut self, pos: Pos2) -> Option<Command>;

    /// Handle primary-button release. Always ends the drag.
    fn on_pointer_up(&mut self, pos: Pos2) -> Option<Command>;
}

/// The tools offered in the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Pencil,
    Line,
    Rectangle,
    Circle,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [Self::Pencil, Self::Line, Self::Rectangle, Self::Circle];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pencil => "Pencil",
            Self::Line => "Line",
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Pencil => "✏",
            Self::Line => "/",
            Self::Rectangle => "□",
            Self::Circle => "○",
        }
    }

    pub fn new_instance(self) -> ToolType {
        match self {
            Self::Pencil => ToolType::Pencil(PencilTool::new()),
            Self::Line => ToolType::Shape(ShapeTool::new(ShapeKind::Line)),
            Self::Rectangle => ToolType::Shape(ShapeTool::new(ShapeKind::Rectangle)),
            Self::Circle => ToolType::Shape(ShapeTool::new(ShapeKind::Ellipse)),
        }
    }
}

/// Where a tool gets its color from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintSource {
    Color(egui::Color32),
    /// Eraser: paint with whatever the background color is at draw time.
    Background,
}

impl PaintSource {
    pub fn resolve(self, background: egui::Color32) -> egui::Color32 {
        match self {
            Self::Color(color) => color,
            Self::Background => background,
        }
    }

    pub fn is_eraser(self) -> bool {
        matches!(self, Self::Background)
    }
}

/// Enum over all tool implementations, to avoid `Box<dyn Tool>`
#[derive(Debug, Clone)]
pub enum ToolType {
    Pencil(PencilTool),
    Shape(ShapeTool),
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Pencil(tool) => tool.name(),
            Self::Shape(tool) => tool.name(),
        }
    }

    fn is_dragging(&self) -> bool {
        match self {
            Self::Pencil(tool) => tool.is_dragging(),
            Self::Shape(tool) => tool.is_dragging(),
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2) -> Option<Command> {
        match self {
            Self::Pencil(tool) => tool.on_pointer_down(pos),
            Self::Shape(tool) => tool.on_pointer_down(pos),
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2) -> Option<Command> {
        match self {
            Self::Pencil(tool) => tool.on_pointer_move(pos),
            Self::Shape(tool) => tool.on_pointer_move(pos),
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2) -> Option<Command> {
        match self {
            Self::Pencil(tool) => tool.on_pointer_up(pos),
            Self::Shape(tool) => tool.on_pointer_up(pos),
        }
    }
}
