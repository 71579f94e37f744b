use crate::item::ItemId;

/// LIFO record of committed items so the latest one can be taken back.
///
/// Only undo is supported. Popping an id does not remove the item by itself;
/// the caller removes it from the surface.
#[derive(Debug, Default)]
pub struct UndoStack {
    undo_stack: Vec<ItemId>,
}

impl UndoStack {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: ItemId) {
        self.undo_stack.push(id);
    }

    /// Take the most recently committed item, if any
    pub fn pop(&mut self) -> Option<ItemId> {
        self.undo_stack.pop()
    }

    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.undo_stack
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
    }
}
