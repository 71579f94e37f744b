use egui::{Context, Key, PointerButton, Pos2, Rect};

/// Canvas-level input, with positions relative to the canvas origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    /// Primary button pressed inside the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved while the press that started on the canvas is held
    PointerMove { position: Pos2 },
    /// Primary button released after a canvas press
    PointerUp { position: Pos2 },
    /// Command/Ctrl+Z
    Undo,
}

/// Turns raw egui input into `CanvasEvent`s.
///
/// A drag belongs to the canvas only if it started inside it; once started,
/// movement and release are reported even if the pointer leaves the canvas.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    dragging: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process raw egui input for the canvas occupying `canvas_rect`.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<CanvasEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pointer_pos = input.pointer.latest_pos();
            let to_local = |pos: Pos2| (pos - canvas_rect.min).to_pos2();

            if input.pointer.button_pressed(PointerButton::Primary) {
                if let Some(pos) = pointer_pos.filter(|pos| canvas_rect.contains(*pos)) {
                    self.dragging = true;
                    events.push(CanvasEvent::PointerDown {
                        position: to_local(pos),
                    });
                }
            } else if self.dragging {
                // Also runs on the release frame, so the last movement is not lost
                if let Some(pos) = pointer_pos {
                    if Some(pos) != self.last_pointer_pos {
                        events.push(CanvasEvent::PointerMove {
                            position: to_local(pos),
                        });
                    }
                }
            }

            if self.dragging && input.pointer.button_released(PointerButton::Primary) {
                if let Some(pos) = pointer_pos.or(self.last_pointer_pos) {
                    events.push(CanvasEvent::PointerUp {
                        position: to_local(pos),
                    });
                }
                self.dragging = false;
            }

            self.last_pointer_pos = pointer_pos;

            for event in &input.raw.events {
                if let egui::Event::Key {
                    key: Key::Z,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } = event
                {
                    if modifiers.command && !modifiers.shift {
                        events.push(CanvasEvent::Undo);
                    }
                }
            }
        });

        events
    }
}
