use egui::{Color32, ColorImage, Painter, Pos2, Rect, Shape, Stroke, TextureHandle, TextureOptions, Vec2};

use crate::item::{Item, ItemKind, ellipse_points};
use crate::surface::{BackgroundImage, Surface};

/// Paints a `Surface` with egui, caching the background image texture.
#[derive(Default)]
pub struct Renderer {
    // Texture of the current background image, keyed by its generation
    background_texture: Option<(u64, TextureHandle)>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field(
                "background_generation",
                &self.background_texture.as_ref().map(|(generation, _)| generation),
            )
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the surface into `rect`. Item coordinates are relative to `rect.min`.
    pub fn render(&mut self, ctx: &egui::Context, painter: &Painter, rect: Rect, surface: &Surface) {
        let painter = painter.with_clip_rect(rect);
        painter.rect_filled(rect, 0.0, surface.background_color());

        match surface.background_image() {
            Some(background) => {
                let texture = self.background_texture(ctx, background);
                painter.image(
                    texture.id(),
                    rect,
                    Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                    Color32::WHITE,
                );
            }
            None => self.background_texture = None,
        }

        let offset = rect.min.to_vec2();
        for item in surface.items() {
            paint_item(&painter, item, offset);
        }
        if let Some(preview) = surface.preview() {
            paint_item(&painter, preview, offset);
        }
    }

    fn background_texture(&mut self, ctx: &egui::Context, background: &BackgroundImage) -> TextureHandle {
        let generation = background.generation();
        if let Some((cached, handle)) = &self.background_texture {
            if *cached == generation {
                return handle.clone();
            }
        }

        let pixels = background.pixels();
        let image = ColorImage::from_rgba_unmultiplied(
            [pixels.width() as usize, pixels.height() as usize],
            pixels.as_raw(),
        );
        let handle = ctx.load_texture(format!("background_{generation}"), image, TextureOptions::LINEAR);
        self.background_texture = Some((generation, handle.clone()));
        handle
    }
}

/// Paint one item translated by `offset`.
pub fn paint_item(painter: &Painter, item: &Item, offset: Vec2) {
    let stroke = Stroke::new(item.width(), item.color());
    match *item.kind() {
        ItemKind::Segment { from, to } => {
            // Round caps so consecutive segments join smoothly
            let radius = item.width() / 2.0;
            painter.circle_filled(from + offset, radius, item.color());
            if from != to {
                painter.line_segment([from + offset, to + offset], stroke);
                painter.circle_filled(to + offset, radius, item.color());
            }
        }
        ItemKind::Line { from, to } => {
            painter.line_segment([from + offset, to + offset], stroke);
        }
        ItemKind::Rectangle { from, to } => {
            let corners = Rect::from_two_pos(from + offset, to + offset);
            painter.add(Shape::closed_line(
                vec![
                    corners.left_top(),
                    corners.right_top(),
                    corners.right_bottom(),
                    corners.left_bottom(),
                ],
                stroke,
            ));
        }
        ItemKind::Ellipse { from, to } => {
            let points = ellipse_points(Rect::from_two_pos(from + offset, to + offset));
            painter.add(Shape::closed_line(points, stroke));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    fn cached_generation(renderer: &Renderer) -> Option<u64> {
        renderer.background_texture.as_ref().map(|(generation, _)| *generation)
    }

    #[test]
    fn background_texture_follows_the_image_generation() {
        let mut renderer = Renderer::new();
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(Pos2::new(0.0, 0.0), vec2(4.0, 4.0));
        let painter = Painter::new(ctx.clone(), egui::LayerId::background(), rect);
        let mut surface = Surface::new(rect.size(), Color32::WHITE);

        renderer.render(&ctx, &painter, rect, &surface);
        assert_eq!(cached_generation(&renderer), None);

        surface.set_background_image(image::RgbaImage::new(4, 4));
        renderer.render(&ctx, &painter, rect, &surface);
        let first = cached_generation(&renderer);
        assert_eq!(first, surface.background_image().map(BackgroundImage::generation));

        // Same image again: the cached texture is reused
        renderer.render(&ctx, &painter, rect, &surface);
        assert_eq!(cached_generation(&renderer), first);

        surface.set_background_image(image::RgbaImage::new(4, 4));
        renderer.render(&ctx, &painter, rect, &surface);
        let second = cached_generation(&renderer);
        assert!(second > first);
        assert_eq!(second, surface.background_image().map(BackgroundImage::generation));

        surface.clear();
        renderer.render(&ctx, &painter, rect, &surface);
        assert_eq!(cached_generation(&renderer), None);
    }
}
