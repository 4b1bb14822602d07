use crate::layout::Anchor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Circle,
    Square,
    Rectangle,
    Triangle,
    Pentagon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeSize {
    Smallest,
    Smaller,
    Small,
    Medium,
    Large,
}

/// Where a shape sits inside its cell: a named anchor or raw coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    Anchored(Anchor),
    At { x: f32, y: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub color: &'static str,
    pub fill: u8,
    pub rotation: f32,
    pub size: ShapeSize,
    pub placement: Placement,
}

impl Shape {
    pub const fn anchored(
        kind: ShapeKind,
        color: &'static str,
        fill: u8,
        rotation: f32,
        size: ShapeSize,
        anchor: Anchor,
    ) -> Self {
        Self {
            kind,
            color,
            fill,
            rotation,
            size,
            placement: Placement::Anchored(anchor),
        }
    }

    pub const fn at(
        kind: ShapeKind,
        color: &'static str,
        fill: u8,
        rotation: f32,
        size: ShapeSize,
        x: f32,
        y: f32,
    ) -> Self {
        Self {
            kind,
            color,
            fill,
            rotation,
            size,
            placement: Placement::At { x, y },
        }
    }
}

/// One grid slot's visual content, drawn back-to-front in sequence order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub shapes: &'static [Shape],
}

impl Cell {
    pub const EMPTY: Cell = Cell { shapes: &[] };

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
