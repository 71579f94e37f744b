use egui::{Color32, Pos2, Rect};

/// Number of straight pieces used to approximate an ellipse outline.
pub const ELLIPSE_SEGMENTS: usize = 64;

/// Identifier of a committed item on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Geometry of a drawable item
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemKind {
    /// One piece of a freehand stroke, drawn with round caps.
    Segment { from: Pos2, to: Pos2 },
    Line { from: Pos2, to: Pos2 },
    /// Outline of the axis-aligned box spanned by the two corners.
    Rectangle { from: Pos2, to: Pos2 },
    /// Outline of the ellipse inscribed in the box spanned by the two corners.
    Ellipse { from: Pos2, to: Pos2 },
}

impl ItemKind {
    pub fn endpoints(&self) -> (Pos2, Pos2) {
        match *self {
            Self::Segment { from, to }
            | Self::Line { from, to }
            | Self::Rectangle { from, to }
            | Self::Ellipse { from, to } => (from, to),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Segment { .. } => "segment",
            Self::Line { .. } => "line",
            Self::Rectangle { .. } => "rectangle",
            Self::Ellipse { .. } => "ellipse",
        }
    }
}

/// Something drawn on the surface with a fixed color and width
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ItemId,
    kind: ItemKind,
    color: Color32,
    width: f32,
}

impl Item {
    pub fn new(id: ItemId, kind: ItemKind, color: Color32, width: f32) -> Self {
        Self {
            id,
            kind,
            color,
            width,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Bounding box including half the pen width on every side.
    pub fn rect(&self) -> Rect {
        let (from, to) = self.kind.endpoints();
        calculate_bounds(&[from, to], self.width / 2.0)
    }

    /// Centre line of the item, ready for repeated distance queries.
    pub fn outline(&self) -> Outline {
        match self.kind {
            ItemKind::Segment { from, to } | ItemKind::Line { from, to } => {
                Outline::Polyline(vec![from, to])
            }
            ItemKind::Rectangle { from, to } => Outline::Rect(Rect::from_two_pos(from, to)),
            ItemKind::Ellipse { from, to } => {
                let mut points = ellipse_points(Rect::from_two_pos(from, to));
                points.push(points[0]);
                Outline::Polyline(points)
            }
        }
    }
}

/// Centre line of an item's stroke
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Open chain of points; a single repeated point is a dot.
    Polyline(Vec<Pos2>),
    Rect(Rect),
}

impl Outline {
    pub fn distance_to(&self, point: Pos2) -> f32 {
        match self {
            Self::Polyline(points) => points
                .windows(2)
                .map(|pair| distance_to_line_segment(point, pair[0], pair[1]))
                .fold(f32::INFINITY, f32::min),
            Self::Rect(rect) => distance_to_rect_outline(point, *rect),
        }
    }
}

/// Distance from a point to a line segment. Degenerates to point distance
/// when the segment has zero length.
pub fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

/// Unsigned distance from a point to the border of a rectangle.
pub fn distance_to_rect_outline(point: Pos2, rect: Rect) -> f32 {
    let half = rect.size() / 2.0;
    let d = (point - rect.center()).abs() - half;
    let outside = egui::vec2(d.x.max(0.0), d.y.max(0.0)).length();
    let inside = d.x.max(d.y).min(0.0);
    (outside + inside).abs()
}

/// Polygon approximating the ellipse inscribed in `rect`.
pub fn ellipse_points(rect: Rect) -> Vec<Pos2> {
    let center = rect.center();
    let radius = rect.size() / 2.0;
    (0..ELLIPSE_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / ELLIPSE_SEGMENTS as f32 * std::f32::consts::TAU;
            Pos2::new(
                center.x + radius.x * angle.cos(),
                center.y + radius.y * angle.sin(),
            )
        })
        .collect()
}

/// Calculate the bounding box for a set of points
pub(crate) fn calculate_bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(
        Pos2::new(min_x - padding, min_y - padding),
        Pos2::new(max_x + padding, max_y + padding),
    )
}
