use egui::Pos2;

use crate::command::Command;
use crate::item::ItemKind;
use crate::tools::Tool;

/// Freehand tool: every pointer event commits one short segment.
#[derive(Debug, Clone, Default)]
pub struct PencilTool {
    // Last recorded pointer position while the button is held
    last_point: Option<Pos2>,
}

impl PencilTool {
    pub fn new() -> Self {
        Self { last_point: None }
    }

    fn segment_to(&mut self, pos: Pos2) -> Option<Command> {
        let from = self.last_point.replace(pos)?;
        Some(Command::AddItem(ItemKind::Segment { from, to: pos }))
    }
}

impl Tool for PencilTool {
    fn name(&self) -> &'static str {
        "Pencil"
    }

    fn is_dragging(&self) -> bool {
        self.last_point.is_some()
    }

    fn on_pointer_down(&mut self, pos: Pos2) -> Option<Command> {
        // The press itself leaves a dot
        self.last_point = Some(pos);
        self.segment_to(pos)
    }

    fn on_pointer_move(&mut self, pos: Pos2) -> Option<Command> {
        if self.last_point.is_none() {
            return None;
        }
        self.segment_to(pos)
    }

    fn on_pointer_up(&mut self, pos: Pos2) -> Option<Command> {
        // Release away from the last point still closes the stroke there
        let last = self.last_point.take()?;
        (last != pos).then_some(Command::AddItem(ItemKind::Segment { from: last, to: pos }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_leaves_zero_length_segment() {
        let mut tool = PencilTool::new();
        let p = Pos2::new(4.0, 5.0);
        assert_eq!(
            tool.on_pointer_down(p),
            Some(Command::AddItem(ItemKind::Segment { from: p, to: p }))
        );
        assert!(tool.is_dragging());
    }

    #[test]
    fn moves_chain_from_last_point() {
        let mut tool = PencilTool::new();
        tool.on_pointer_down(Pos2::new(0.0, 0.0));
        tool.on_pointer_move(Pos2::new(1.0, 0.0));
        assert_eq!(
            tool.on_pointer_move(Pos2::new(2.0, 3.0)),
            Some(Command::AddItem(ItemKind::Segment {
                from: Pos2::new(1.0, 0.0),
                to: Pos2::new(2.0, 3.0),
            }))
        );
        assert_eq!(tool.on_pointer_up(Pos2::new(2.0, 3.0)), None);
        assert!(!tool.is_dragging());
    }

    #[test]
    fn release_elsewhere_finishes_the_stroke() {
        let mut tool = PencilTool::new();
        tool.on_pointer_down(Pos2::new(0.0, 0.0));
        tool.on_pointer_move(Pos2::new(5.0, 0.0));
        assert_eq!(
            tool.on_pointer_up(Pos2::new(9.0, 0.0)),
            Some(Command::AddItem(ItemKind::Segment {
                from: Pos2::new(5.0, 0.0),
                to: Pos2::new(9.0, 0.0),
            }))
        );
        assert!(!tool.is_dragging());
        assert_eq!(tool.on_pointer_up(Pos2::new(9.0, 0.0)), None);
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut tool = PencilTool::new();
        assert_eq!(tool.on_pointer_move(Pos2::new(1.0, 1.0)), None);
    }
}
