use crate::item::ItemKind;

/// Surface edit produced by a tool in response to pointer input.
///
/// Tools only describe geometry; the controller supplies the color and
/// width in effect when the command is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Commit an item and record it for undo
    AddItem(ItemKind),
    /// Replace the transient preview
    ShowPreview(ItemKind),
}

impl Command {
    pub fn kind(&self) -> &ItemKind {
        match self {
            Self::AddItem(kind) | Self::ShowPreview(kind) => kind,
        }
    }
}
