use katachi_core::render::{
    fill_offset, gradient_fill, gradient_id, kind_slug, shape_path, shape_transform, size_scale,
    translate, CELL_VIEWBOX, SHAPE_STROKE_WIDTH,
};
use katachi_core::{resolve_placement, Anchor, Placement, Shape, ShapeKind, ShapeSize};

#[test]
fn named_anchors_resolve_to_cell_offsets() {
    assert_eq!(resolve_placement(Placement::Anchored(Anchor::Center)), (0.0, 0.0));
    assert_eq!(
        resolve_placement(Placement::Anchored(Anchor::TopLeft)),
        (-33.0, -33.0)
    );
    assert_eq!(
        resolve_placement(Placement::Anchored(Anchor::BottomRight)),
        (33.0, 33.0)
    );
    assert_eq!(
        resolve_placement(Placement::Anchored(Anchor::UpperLeft)),
        (-45.0, -22.5)
    );
}

#[test]
fn explicit_coordinates_pass_through() {
    assert_eq!(
        resolve_placement(Placement::At { x: 28.0, y: -15.0 }),
        (28.0, -15.0)
    );
}

#[test]
fn all_anchors_stay_inside_the_viewbox() {
    for anchor in Anchor::ALL {
        let (x, y) = anchor.offset();
        assert!(x.abs() <= 45.0 && y.abs() <= 45.0, "{anchor:?}");
    }
}

#[test]
fn size_scales() {
    assert_eq!(size_scale(ShapeSize::Smallest), 0.1);
    assert_eq!(size_scale(ShapeSize::Smaller), 0.25);
    assert_eq!(size_scale(ShapeSize::Small), 0.5);
    assert_eq!(size_scale(ShapeSize::Medium), 0.75);
    assert_eq!(size_scale(ShapeSize::Large), 1.0);
}

#[test]
fn shape_paths_close_where_expected() {
    assert_eq!(shape_path(ShapeKind::Line), "M-40,0 L40,0");
    assert_eq!(
        shape_path(ShapeKind::Triangle),
        "M0,-40 L40,40 L-40,40 Z"
    );
    for kind in [
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
        ShapeKind::Pentagon,
    ] {
        assert!(shape_path(kind).ends_with('Z'), "{kind:?}");
    }
}

#[test]
fn transform_strings() {
    let shape = Shape::anchored(
        ShapeKind::Line,
        "#000000",
        100,
        45.0,
        ShapeSize::Small,
        Anchor::Center,
    );
    assert_eq!(shape_transform(&shape), "rotate(45) scale(0.5)");
    assert_eq!(translate(-33.0, 0.0), "translate(-33, 0)");
}

#[test]
fn gradient_id_strips_the_color_hash() {
    let shape = Shape::anchored(
        ShapeKind::Triangle,
        "#FF00FF",
        30,
        0.0,
        ShapeSize::Large,
        Anchor::Center,
    );
    let id = gradient_id(&shape);
    assert_eq!(id, "grad-triangle-FF00FF-30");
    assert!(!id.contains('#'));
    assert_eq!(gradient_fill(&shape), "url(#grad-triangle-FF00FF-30)");
}

#[test]
fn gradient_ids_distinguish_fill_levels() {
    let a = Shape::anchored(
        ShapeKind::Circle,
        "#FFA500",
        30,
        0.0,
        ShapeSize::Large,
        Anchor::Center,
    );
    let b = Shape::anchored(
        ShapeKind::Circle,
        "#FFA500",
        60,
        0.0,
        ShapeSize::Large,
        Anchor::Center,
    );
    assert_ne!(gradient_id(&a), gradient_id(&b));
}

#[test]
fn fill_offsets_are_percentages() {
    assert_eq!(fill_offset(0), "0%");
    assert_eq!(fill_offset(50), "50%");
    assert_eq!(fill_offset(100), "100%");
}

#[test]
fn kind_slugs_are_lowercase_ascii() {
    for kind in [
        ShapeKind::Line,
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
        ShapeKind::Pentagon,
    ] {
        let slug = kind_slug(kind);
        assert!(slug.chars().all(|ch| ch.is_ascii_lowercase()), "{slug}");
    }
}

#[test]
fn viewbox_and_stroke_constants() {
    assert_eq!(CELL_VIEWBOX, "-50 -50 100 100");
    assert_eq!(SHAPE_STROKE_WIDTH, "4");
}
