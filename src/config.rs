use egui::Color32;
use serde::{Deserialize, Serialize};

/// Which set of controls the application exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edition {
    /// Every tool, undo, eraser, background controls and PNG export.
    Full,
    /// Freehand drawing with color and width only.
    Basic,
}

impl Edition {
    pub fn has_shapes(self) -> bool {
        matches!(self, Self::Full)
    }

    pub fn has_undo(self) -> bool {
        matches!(self, Self::Full)
    }
}

/// Static settings the app is started with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub title: String,
    pub edition: Edition,
    /// Initial canvas size in points.
    pub canvas_size: [f32; 2],
    /// The two colors the background toggles between; the first one is used at startup.
    pub backgrounds: [[u8; 3]; 2],
    pub pen_color: [u8; 3],
    pub min_width: f32,
    pub max_width: f32,
    pub default_width: f32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self::full()
    }
}

impl SketchConfig {
    pub fn full() -> Self {
        Self {
            title: "Pencil Sketch App".to_owned(),
            edition: Edition::Full,
            canvas_size: [800.0, 600.0],
            backgrounds: [[255, 255, 255], [211, 211, 211]],
            pen_color: [0, 0, 0],
            min_width: 1.0,
            max_width: 20.0,
            default_width: 5.0,
        }
    }

    pub fn basic() -> Self {
        Self {
            title: "Pencil Sketch".to_owned(),
            edition: Edition::Basic,
            ..Self::full()
        }
    }

    pub fn background_colors(&self) -> [Color32; 2] {
        self.backgrounds.map(|[r, g, b]| Color32::from_rgb(r, g, b))
    }

    pub fn pen_color(&self) -> Color32 {
        let [r, g, b] = self.pen_color;
        Color32::from_rgb(r, g, b)
    }
}
