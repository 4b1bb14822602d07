use crate::scene::Placement;

/// Named placement tokens inside the normalized cell space. Compass points
/// sit at ±33 on each axis, the intermediate tokens at ±22.5 / ±45.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopLeftCenter,
    TopCenter,
    TopRightCenter,
    TopRight,
    UpperLeft,
    UpperCenter,
    UpperRight,
    MiddleLeft,
    MiddleLeftCenter,
    Center,
    MiddleRightCenter,
    MiddleRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
    BottomLeft,
    BottomLeftCenter,
    BottomCenter,
    BottomRightCenter,
    BottomRight,
}

impl Anchor {
    pub const ALL: [Anchor; 21] = [
        Anchor::TopLeft,
        Anchor::TopLeftCenter,
        Anchor::TopCenter,
        Anchor::TopRightCenter,
        Anchor::TopRight,
        Anchor::UpperLeft,
        Anchor::UpperCenter,
        Anchor::UpperRight,
        Anchor::MiddleLeft,
        Anchor::MiddleLeftCenter,
        Anchor::Center,
        Anchor::MiddleRightCenter,
        Anchor::MiddleRight,
        Anchor::LowerLeft,
        Anchor::LowerCenter,
        Anchor::LowerRight,
        Anchor::BottomLeft,
        Anchor::BottomLeftCenter,
        Anchor::BottomCenter,
        Anchor::BottomRightCenter,
        Anchor::BottomRight,
    ];

    pub const fn offset(self) -> (f32, f32) {
        match self {
            Anchor::TopLeft => (-33.0, -33.0),
            Anchor::TopCenter => (0.0, -33.0),
            Anchor::TopRight => (33.0, -33.0),
            Anchor::MiddleLeft => (-33.0, 0.0),
            Anchor::Center => (0.0, 0.0),
            Anchor::MiddleRight => (33.0, 0.0),
            Anchor::BottomLeft => (-33.0, 33.0),
            Anchor::BottomCenter => (0.0, 33.0),
            Anchor::BottomRight => (33.0, 33.0),
            Anchor::TopLeftCenter => (-22.5, -45.0),
            Anchor::TopRightCenter => (22.5, -45.0),
            Anchor::UpperLeft => (-45.0, -22.5),
            Anchor::UpperCenter => (0.0, -22.5),
            Anchor::UpperRight => (45.0, -22.5),
            Anchor::MiddleLeftCenter => (-22.5, 0.0),
            Anchor::MiddleRightCenter => (22.5, 0.0),
            Anchor::LowerLeft => (-45.0, 22.5),
            Anchor::LowerCenter => (0.0, 22.5),
            Anchor::LowerRight => (45.0, 22.5),
            Anchor::BottomLeftCenter => (-22.5, 45.0),
            Anchor::BottomRightCenter => (22.5, 45.0),
        }
    }
}

/// Resolve a placement to a concrete offset. Explicit coordinates pass
/// through unchanged.
pub const fn resolve_placement(placement: Placement) -> (f32, f32) {
    match placement {
        Placement::Anchored(anchor) => anchor.offset(),
        Placement::At { x, y } => (x, y),
    }
}
