use crate::scene::{Shape, ShapeKind, ShapeSize};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const CELL_VIEWBOX: &str = "-50 -50 100 100";
pub const SHAPE_STROKE_WIDTH: &str = "4";

/// Unit path per shape kind, centered at the origin inside a ±40 box.
pub const fn shape_path(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Line => "M-40,0 L40,0",
        ShapeKind::Circle => "M0,0 m-40,0 a40,40 0 1,0 80,0 a40,40 0 1,0 -80,0",
        ShapeKind::Square => "M-40,-40 L40,-40 L40,40 L-40,40 Z",
        ShapeKind::Rectangle => "M-40,-20 L40,-20 L40,20 L-40,20 Z",
        ShapeKind::Triangle => "M0,-40 L40,40 L-40,40 Z",
        ShapeKind::Pentagon => "M0,-40 L38,-12 L23,40 L-23,40 L-38,-12 Z",
    }
}

pub const fn kind_slug(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Line => "line",
        ShapeKind::Circle => "circle",
        ShapeKind::Square => "square",
        ShapeKind::Rectangle => "rectangle",
        ShapeKind::Triangle => "triangle",
        ShapeKind::Pentagon => "pentagon",
    }
}

pub const fn size_scale(size: ShapeSize) -> f32 {
    match size {
        ShapeSize::Smallest => 0.1,
        ShapeSize::Smaller => 0.25,
        ShapeSize::Small => 0.5,
        ShapeSize::Medium => 0.75,
        ShapeSize::Large => 1.0,
    }
}

pub fn shape_transform(shape: &Shape) -> String {
    format!(
        "rotate({}) scale({})",
        shape.rotation,
        size_scale(shape.size)
    )
}

pub fn translate(x: f32, y: f32) -> String {
    format!("translate({x}, {y})")
}

/// Gradient stop offset where opaque color ends and transparency begins.
pub fn fill_offset(fill: u8) -> String {
    format!("{fill}%")
}

/// Identifier for the partial-fill gradient. Shapes with the same kind,
/// color, and fill share one definition. Only alphanumeric characters of
/// the color survive so the id stays a valid URL fragment.
pub fn gradient_id(shape: &Shape) -> String {
    let color: String = shape
        .color
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .collect();
    format!("grad-{}-{}-{}", kind_slug(shape.kind), color, shape.fill)
}

pub fn gradient_fill(shape: &Shape) -> String {
    format!("url(#{})", gradient_id(shape))
}
