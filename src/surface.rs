use egui::{Color32, Vec2};
use image::RgbaImage;

use crate::item::{Item, ItemId, ItemKind};

/// Image drawn underneath every item, already sized to the canvas.
#[derive(Debug, Clone)]
pub struct BackgroundImage {
    pixels: RgbaImage,
    generation: u64,
}

impl BackgroundImage {
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Changes every time a new image is set; used to refresh cached textures.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// The retained drawing: background plus items in z-order, bottom first.
#[derive(Debug)]
pub struct Surface {
    size: Vec2,
    background_color: Color32,
    background_image: Option<BackgroundImage>,
    items: Vec<Item>,
    preview: Option<Item>,
    next_id: u64,
    next_generation: u64,
}

impl Surface {
    pub fn new(size: Vec2, background_color: Color32) -> Self {
        Self {
            size,
            background_color,
            background_image: None,
            items: Vec::new(),
            preview: None,
            next_id: 1,
            next_generation: 1,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    pub fn background_color(&self) -> Color32 {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Color32) {
        self.background_color = color;
    }

    pub fn background_image(&self) -> Option<&BackgroundImage> {
        self.background_image.as_ref()
    }

    pub fn set_background_image(&mut self, pixels: RgbaImage) {
        self.background_image = Some(BackgroundImage {
            pixels,
            generation: self.next_generation,
        });
        self.next_generation += 1;
    }

    /// Commit a new item on top of everything else and return its id
    pub fn add_item(&mut self, kind: ItemKind, color: Color32, width: f32) -> ItemId {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        self.items.push(Item::new(id, kind, color, width));
        id
    }

    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Replace the transient preview; the preview never gets an id from the item sequence.
    pub fn set_preview(&mut self, kind: ItemKind, color: Color32, width: f32) {
        self.preview = Some(Item::new(ItemId::new(0), kind, color, width));
    }

    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    pub fn preview(&self) -> Option<&Item> {
        self.preview.as_ref()
    }

    /// Drop every item, the preview and the background image.
    pub fn clear(&mut self) {
        self.items.clear();
        self.preview = None;
        self.background_image = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Pos2;

    fn segment() -> ItemKind {
        ItemKind::Segment {
            from: Pos2::new(1.0, 1.0),
            to: Pos2::new(2.0, 2.0),
        }
    }

    #[test]
    fn ids_are_unique_and_removal_keeps_order() {
        let mut surface = Surface::new(Vec2::new(10.0, 10.0), Color32::WHITE);
        let a = surface.add_item(segment(), Color32::BLACK, 1.0);
        let b = surface.add_item(segment(), Color32::BLACK, 1.0);
        let c = surface.add_item(segment(), Color32::BLACK, 1.0);
        assert_ne!(a, b);

        assert!(surface.remove_item(b).is_some());
        let ids: Vec<_> = surface.items().iter().map(Item::id).collect();
        assert_eq!(ids, vec![a, c]);
        assert!(surface.remove_item(b).is_none());
    }

    #[test]
    fn background_generation_advances() {
        let mut surface = Surface::new(Vec2::new(2.0, 2.0), Color32::WHITE);
        surface.set_background_image(RgbaImage::new(2, 2));
        let first = surface.background_image().map(BackgroundImage::generation);
        surface.set_background_image(RgbaImage::new(2, 2));
        let second = surface.background_image().map(BackgroundImage::generation);
        assert_ne!(first, second);

        surface.clear();
        assert!(surface.background_image().is_none());
    }
}
