use egui::Pos2;

use crate::command::Command;
use crate::item::ItemKind;
use crate::tools::Tool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Ellipse,
}

impl ShapeKind {
    pub fn item(self, from: Pos2, to: Pos2) -> ItemKind {
        match self {
            Self::Line => ItemKind::Line { from, to },
            Self::Rectangle => ItemKind::Rectangle { from, to },
            Self::Ellipse => ItemKind::Ellipse { from, to },
        }
    }
}

/// Press-drag-release tool for two-point shapes.
///
/// Moves produce previews, the release commits the final shape.
#[derive(Debug, Clone)]
pub struct ShapeTool {
    shape: ShapeKind,
    start: Option<Pos2>,
}

impl ShapeTool {
    pub fn new(shape: ShapeKind) -> Self {
        Self { shape, start: None }
    }
}

impl Tool for ShapeTool {
    fn name(&self) -> &'static str {
        match self.shape {
            ShapeKind::Line => "Line",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Ellipse => "Circle",
        }
    }

    fn is_dragging(&self) -> bool {
        self.start.is_some()
    }

    fn on_pointer_down(&mut self, pos: Pos2) -> Option<Command> {
        self.start = Some(pos);
        None
    }

    fn on_pointer_move(&mut self, pos: Pos2) -> Option<Command> {
        let start = self.start?;
        Some(Command::ShowPreview(self.shape.item(start, pos)))
    }

    fn on_pointer_up(&mut self, pos: Pos2) -> Option<Command> {
        let start = self.start.take()?;
        Some(Command::AddItem(self.shape.item(start, pos)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_commits_from_press_point() {
        let mut tool = ShapeTool::new(ShapeKind::Rectangle);
        assert_eq!(tool.on_pointer_down(Pos2::new(10.0, 10.0)), None);
        assert_eq!(
            tool.on_pointer_move(Pos2::new(50.0, 30.0)),
            Some(Command::ShowPreview(ItemKind::Rectangle {
                from: Pos2::new(10.0, 10.0),
                to: Pos2::new(50.0, 30.0),
            }))
        );
        assert_eq!(
            tool.on_pointer_up(Pos2::new(100.0, 80.0)),
            Some(Command::AddItem(ItemKind::Rectangle {
                from: Pos2::new(10.0, 10.0),
                to: Pos2::new(100.0, 80.0),
            }))
        );
        assert!(!tool.is_dragging());
    }

    #[test]
    fn release_without_press_commits_nothing() {
        let mut tool = ShapeTool::new(ShapeKind::Line);
        assert_eq!(tool.on_pointer_up(Pos2::new(1.0, 1.0)), None);
    }
}
