use katachi_core::render::{
    fill_offset, gradient_fill, gradient_id, shape_path, shape_transform, translate, CELL_VIEWBOX,
    SHAPE_STROKE_WIDTH, SVG_NS,
};
use katachi_core::{resolve_placement, Cell, Shape};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShapeSvgProps {
    pub shape: Shape,
}

/// One shape: a left-to-right gradient that turns transparent at the
/// shape's fill percentage, then the outlined path on top of it.
#[function_component(ShapeSvg)]
pub(crate) fn shape_svg(props: &ShapeSvgProps) -> Html {
    let shape = &props.shape;
    let grad = gradient_id(shape);
    let stop = fill_offset(shape.fill);
    html! {
        <g transform={shape_transform(shape)}>
            <defs>
                <linearGradient id={grad} x1="0%" y1="0%" x2="100%" y2="0%">
                    <stop offset="0%" stop-color={shape.color} />
                    <stop offset={stop.clone()} stop-color={shape.color} />
                    <stop offset={stop} stop-color="transparent" />
                    <stop offset="100%" stop-color="transparent" />
                </linearGradient>
            </defs>
            <path
                d={shape_path(shape.kind)}
                fill={gradient_fill(shape)}
                stroke={shape.color}
                stroke-width={SHAPE_STROKE_WIDTH}
            />
        </g>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct CellViewProps {
    pub cell: Cell,
}

/// One grid slot as a standalone 100x100 viewbox. Shapes draw in sequence
/// order, each offset by its resolved placement.
#[function_component(CellView)]
pub(crate) fn cell_view(props: &CellViewProps) -> Html {
    let shapes: Html = props
        .cell
        .shapes
        .iter()
        .map(|shape| {
            let (x, y) = resolve_placement(shape.placement);
            html! {
                <g transform={translate(x, y)}>
                    <ShapeSvg shape={*shape} />
                </g>
            }
        })
        .collect();
    html! {
        <svg class="cell" viewBox={CELL_VIEWBOX} xmlns={SVG_NS}>
            { shapes }
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct MatrixViewProps {
    pub matrix: [[Option<Cell>; 3]; 3],
}

#[function_component(MatrixView)]
pub(crate) fn matrix_view(props: &MatrixViewProps) -> Html {
    let slots: Html = props
        .matrix
        .iter()
        .flatten()
        .map(|slot| match slot {
            Some(cell) => html! { <CellView cell={*cell} /> },
            None => html! { <div class="cell cell-blank">{ "?" }</div> },
        })
        .collect();
    html! {
        <div class="matrix">
            { slots }
        </div>
    }
}
