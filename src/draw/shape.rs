//! Shape definitions rasterized by the canvas tools.

use super::color::Color;
use super::font::FontDescriptor;

/// A piece of geometry that can be burned into the raster buffer.
///
/// Shapes are not retained after rendering; the engine builds one per
/// pointer event and rasterizes it immediately.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// One incremental piece of a brush or eraser stroke
    Segment {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        width: f64,
    },
    /// Straight line from anchor to cursor
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        width: f64,
    },
    /// Axis-aligned rectangle outline (width/height always non-negative)
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Color,
        width: f64,
    },
    /// Circle outline centered on the anchor
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: Color,
        width: f64,
    },
    /// Closed triangle outline
    Triangle {
        points: [(f64, f64); 3],
        color: Color,
        width: f64,
    },
    /// Filled text with its baseline at `y`
    Text {
        x: f64,
        y: f64,
        text: String,
        color: Color,
        size: f64,
        font_descriptor: FontDescriptor,
    },
}

impl Shape {
    /// Rectangle outline spanning anchor to cursor in any drag direction.
    pub fn rect(sx: f64, sy: f64, x: f64, y: f64, color: Color, width: f64) -> Self {
        Shape::Rect {
            x: sx.min(x),
            y: sy.min(y),
            w: (x - sx).abs(),
            h: (y - sy).abs(),
            color,
            width,
        }
    }

    /// Circle centered on the anchor passing through the cursor.
    pub fn circle(sx: f64, sy: f64, x: f64, y: f64, color: Color, width: f64) -> Self {
        Shape::Circle {
            cx: sx,
            cy: sy,
            radius: (x - sx).hypot(y - sy),
            color,
            width,
        }
    }

    /// Isosceles triangle with its apex at the anchor, mirrored about the
    /// vertical line through the anchor.
    pub fn triangle(sx: f64, sy: f64, x: f64, y: f64, color: Color, width: f64) -> Self {
        Shape::Triangle {
            points: [(sx, sy), (x, y), (sx - (x - sx), y)],
            color,
            width,
        }
    }

    pub fn line(sx: f64, sy: f64, x: f64, y: f64, color: Color, width: f64) -> Self {
        Shape::Line {
            x1: sx,
            y1: sy,
            x2: x,
            y2: y,
            color,
            width,
        }
    }

    pub fn segment(from: (f64, f64), to: (f64, f64), color: Color, width: f64) -> Self {
        Shape::Segment {
            x1: from.0,
            y1: from.1,
            x2: to.0,
            y2: to.1,
            color,
            width,
        }
    }
}

/// Pixel font size the text tool uses for a given brush size.
pub fn text_size_for_brush(brush_size: u32) -> f64 {
    f64::from(brush_size) * 2.0 + 10.0
}
