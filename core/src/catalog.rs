use std::fmt;

use crate::layout::Anchor::*;
use crate::quiz::{OptionKey, Question};
use crate::scene::ShapeKind::*;
use crate::scene::ShapeSize::*;
use crate::scene::{Cell, Shape};

const BLACK: &str = "#000000";

const fn cell(shapes: &'static [Shape]) -> Cell {
    Cell { shapes }
}

pub fn question_by_id(id: u32) -> Option<&'static Question> {
    QUESTION_CATALOG.iter().find(|question| question.id == id)
}

/// The ten hand-authored exercises. Pure content: nothing here is computed
/// or mutated at run time.
pub const QUESTION_CATALOG: &[Question] = &[
    Question {
        id: 1,
        matrix: [
            [
                Some(cell(&[Shape::anchored(Circle, BLACK, 0, 0.0, Large, Center)])),
                Some(cell(&[Shape::anchored(Square, "#FF0000", 50, 0.0, Large, Center)])),
                Some(cell(&[Shape::anchored(Triangle, "#FF00FF", 100, 0.0, Large, Center)])),
            ],
            [
                Some(cell(&[Shape::anchored(Circle, "#0000FF", 50, 0.0, Large, Center)])),
                Some(cell(&[Shape::anchored(Square, "#FFFF00", 100, 0.0, Large, Center)])),
                Some(cell(&[Shape::anchored(Triangle, "#FF00FF", 0, 0.0, Large, Center)])),
            ],
            [
                Some(cell(&[Shape::anchored(Circle, "#00FFFF", 100, 0.0, Large, Center)])),
                Some(cell(&[Shape::anchored(Square, "#800080", 0, 0.0, Large, Center)])),
                None,
            ],
        ],
        answer: OptionKey::E,
        options: [
            cell(&[Shape::anchored(Circle, "#FFA500", 30, 0.0, Large, Center)]),
            cell(&[Shape::anchored(Pentagon, "#008000", 70, 0.0, Large, Center)]),
            cell(&[Shape::anchored(Line, "#800000", 80, 0.0, Large, Center)]),
            cell(&[Shape::anchored(Circle, "#FFA500", 60, 0.0, Large, Center)]),
            cell(&[Shape::anchored(Triangle, "#008000", 50, 0.0, Large, Center)]),
            cell(&[Shape::anchored(Line, "#800000", 10, 0.0, Large, Center)]),
        ],
        hint: "Look at how much of each object is filled with color",
    },
    Question {
        id: 2,
        matrix: [
            [
                Some(cell(&[Shape::anchored(Line, BLACK, 100, 45.0, Large, Center)])),
                Some(cell(&[Shape::anchored(Line, BLACK, 100, 90.0, Large, Center)])),
                Some(cell(&[Shape::anchored(Line, BLACK, 100, 135.0, Large, Center)])),
            ],
            [
                Some(cell(&[Shape::anchored(Line, BLACK, 100, 0.0, Large, Center)])),
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                    Shape::anchored(Line, BLACK, 100, 45.0, Large, Center),
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                    Shape::anchored(Line, BLACK, 100, 135.0, Large, Center),
                ])),
                Some(cell(&[Shape::anchored(Line, BLACK, 100, 0.0, Large, Center)])),
            ],
            [
                Some(cell(&[Shape::anchored(Line, BLACK, 100, 135.0, Large, Center)])),
                Some(cell(&[Shape::anchored(Line, BLACK, 100, 90.0, Large, Center)])),
                None,
            ],
        ],
        answer: OptionKey::C,
        options: [
            cell(&[Shape::anchored(Line, BLACK, 100, 0.0, Large, Center)]),
            cell(&[Shape::anchored(Line, BLACK, 100, 135.0, Large, Center)]),
            cell(&[Shape::anchored(Line, BLACK, 100, 45.0, Large, Center)]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 45.0, Large, Center),
                Shape::anchored(Line, BLACK, 100, 135.0, Large, Center),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                Shape::anchored(Line, BLACK, 100, 45.0, Large, Center),
                Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
            ]),
        ],
        hint: "Observe the pattern of line rotations in each row and column. \
               Pay attention to how the number of lines changes in different cells.",
    },
    Question {
        id: 3,
        matrix: [
            [
                Some(cell(&[Shape::anchored(Circle, BLACK, 0, 0.0, Large, Center)])),
                Some(cell(&[
                    Shape::anchored(Circle, BLACK, 0, 0.0, Large, Center),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smallest, Center),
                ])),
                Some(cell(&[
                    Shape::anchored(Circle, BLACK, 0, 0.0, Large, Center),
                    Shape::anchored(Line, BLACK, 100, 0.0, Small, Center),
                    Shape::anchored(Line, BLACK, 100, 90.0, Small, Center),
                ])),
            ],
            [
                Some(cell(&[
                    Shape::anchored(Square, BLACK, 0, 0.0, Large, Center),
                    Shape::anchored(Line, BLACK, 100, 0.0, Small, Center),
                    Shape::anchored(Line, BLACK, 100, 90.0, Small, Center),
                ])),
                Some(cell(&[Shape::anchored(Square, BLACK, 0, 0.0, Large, Center)])),
                Some(cell(&[
                    Shape::anchored(Square, BLACK, 0, 0.0, Large, Center),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smallest, Center),
                ])),
            ],
            [
                Some(cell(&[
                    Shape::anchored(Triangle, BLACK, 0, 0.0, Large, Center),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smallest, Center),
                ])),
                Some(cell(&[
                    Shape::anchored(Triangle, BLACK, 0, 0.0, Large, Center),
                    Shape::anchored(Line, BLACK, 100, 0.0, Small, Center),
                    Shape::anchored(Line, BLACK, 100, 90.0, Small, Center),
                ])),
                None,
            ],
        ],
        answer: OptionKey::C,
        options: [
            cell(&[
                Shape::anchored(Triangle, BLACK, 0, 0.0, Large, Center),
                Shape::anchored(Square, BLACK, 100, 0.0, Smallest, Center),
            ]),
            cell(&[
                Shape::anchored(Triangle, BLACK, 0, 0.0, Large, Center),
                Shape::anchored(Circle, BLACK, 100, 0.0, Smallest, Center),
            ]),
            cell(&[Shape::anchored(Triangle, BLACK, 0, 0.0, Large, Center)]),
            cell(&[Shape::anchored(Triangle, BLACK, 100, 0.0, Large, Center)]),
            cell(&[Shape::anchored(Circle, BLACK, 0, 0.0, Large, Center)]),
            cell(&[
                Shape::anchored(Triangle, BLACK, 0, 0.0, Large, Center),
                Shape::anchored(Line, BLACK, 100, 0.0, Small, Center),
                Shape::anchored(Line, BLACK, 100, 90.0, Small, Center),
            ]),
        ],
        hint: "Observe how the outer shape changes in each row, and how the inner \
               elements (dot, cross, or nothing) follow a pattern across rows and columns.",
    },
    Question {
        id: 4,
        matrix: [
            [
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                    Shape::anchored(Rectangle, BLACK, 100, 0.0, Smaller, MiddleLeft),
                ])),
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                    Shape::anchored(Rectangle, BLACK, 100, 0.0, Smaller, Center),
                ])),
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                    Shape::anchored(Rectangle, BLACK, 100, 0.0, Smaller, MiddleRight),
                ])),
            ],
            [
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 45.0, Large, Center),
                    Shape::anchored(Rectangle, BLACK, 100, 45.0, Smaller, TopLeft),
                ])),
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 45.0, Large, Center),
                    Shape::anchored(Rectangle, BLACK, 100, 45.0, Smaller, Center),
                ])),
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 45.0, Large, Center),
                    Shape::anchored(Rectangle, BLACK, 100, 45.0, Smaller, BottomRight),
                ])),
            ],
            [
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                    Shape::anchored(Rectangle, BLACK, 100, 90.0, Smaller, TopCenter),
                ])),
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                    Shape::anchored(Rectangle, BLACK, 100, 90.0, Smaller, Center),
                ])),
                None,
            ],
        ],
        answer: OptionKey::C,
        options: [
            cell(&[
                Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                Shape::anchored(Rectangle, BLACK, 100, 90.0, Smaller, TopCenter),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                Shape::anchored(Rectangle, BLACK, 100, 90.0, Smaller, Center),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                Shape::anchored(Rectangle, BLACK, 100, 90.0, Smaller, BottomCenter),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                Shape::anchored(Rectangle, BLACK, 100, 0.0, Smaller, MiddleRight),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 45.0, Large, Center),
                Shape::anchored(Rectangle, BLACK, 100, 45.0, Smaller, BottomRight),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 135.0, Large, Center),
                Shape::anchored(Rectangle, BLACK, 100, 135.0, Smaller, TopLeft),
            ]),
        ],
        hint: "Observe the pattern of line rotations in each row and how the position \
               of the rectangle changes along the line from left to right in each row.",
    },
    Question {
        id: 5,
        matrix: [
            [
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smallest, TopLeft),
                    Shape::anchored(Square, BLACK, 0, 0.0, Smaller, TopRight),
                ])),
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smallest, TopLeft),
                    Shape::anchored(Square, BLACK, 0, 0.0, Smaller, BottomRight),
                ])),
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smallest, TopLeft),
                    Shape::anchored(Square, BLACK, 0, 0.0, Smaller, BottomLeft),
                ])),
            ],
            [
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smallest, BottomLeft),
                    Shape::anchored(Square, BLACK, 0, 0.0, Smaller, TopRight),
                ])),
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smallest, BottomLeft),
                    Shape::anchored(Square, BLACK, 0, 0.0, Smaller, BottomRight),
                ])),
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smallest, BottomLeft),
                    Shape::anchored(Square, BLACK, 0, 0.0, Smaller, BottomLeft),
                ])),
            ],
            [
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smallest, BottomRight),
                    Shape::anchored(Square, BLACK, 0, 0.0, Smaller, TopRight),
                ])),
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smallest, BottomRight),
                    Shape::anchored(Square, BLACK, 0, 0.0, Smaller, BottomRight),
                ])),
                None,
            ],
        ],
        answer: OptionKey::C,
        options: [
            cell(&[
                Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                Shape::anchored(Circle, BLACK, 100, 0.0, Smallest, TopLeft),
                Shape::anchored(Square, BLACK, 0, 0.0, Smaller, BottomRight),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                Shape::anchored(Circle, BLACK, 100, 0.0, Smallest, BottomLeft),
                Shape::anchored(Square, BLACK, 0, 0.0, Smaller, TopRight),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                Shape::anchored(Circle, BLACK, 100, 0.0, Smallest, BottomRight),
                Shape::anchored(Square, BLACK, 0, 0.0, Smaller, BottomLeft),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                Shape::anchored(Circle, BLACK, 100, 0.0, Smallest, Center),
                Shape::anchored(Square, BLACK, 0, 0.0, Smaller, Center),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                Shape::anchored(Circle, BLACK, 100, 0.0, Smallest, TopRight),
                Shape::anchored(Square, BLACK, 0, 0.0, Smaller, BottomLeft),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                Shape::anchored(Circle, BLACK, 100, 0.0, Smallest, TopLeft),
                Shape::anchored(Square, BLACK, 100, 0.0, Smaller, BottomRight),
            ]),
        ],
        hint: "Observe the pattern of the circle and square positions in each cell. \
               Notice how they move relative to each other and the cross shape across \
               rows and columns.",
    },
    Question {
        id: 6,
        matrix: [
            [
                Some(cell(&[
                    Shape::anchored(Circle, BLACK, 0, 0.0, Medium, Center),
                    Shape::anchored(Line, BLACK, 100, 135.0, Large, Center),
                ])),
                Some(cell(&[
                    Shape::anchored(Square, BLACK, 0, 0.0, Medium, Center),
                    Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                ])),
                Some(cell(&[
                    Shape::anchored(Triangle, BLACK, 0, 0.0, Medium, Center),
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                ])),
            ],
            [
                Some(cell(&[
                    Shape::anchored(Triangle, BLACK, 0, 0.0, Medium, Center),
                    Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
                ])),
                Some(cell(&[
                    Shape::anchored(Circle, BLACK, 0, 0.0, Medium, Center),
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                ])),
                Some(cell(&[
                    Shape::anchored(Square, BLACK, 0, 0.0, Medium, Center),
                    Shape::anchored(Line, BLACK, 100, 135.0, Large, Center),
                ])),
            ],
            [
                Some(cell(&[
                    Shape::anchored(Square, BLACK, 0, 0.0, Medium, Center),
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                ])),
                Some(cell(&[
                    Shape::anchored(Triangle, BLACK, 0, 0.0, Medium, Center),
                    Shape::anchored(Line, BLACK, 100, 135.0, Large, Center),
                ])),
                None,
            ],
        ],
        answer: OptionKey::E,
        options: [
            cell(&[
                Shape::anchored(Circle, BLACK, 0, 0.0, Medium, Center),
                Shape::anchored(Line, BLACK, 100, 135.0, Large, Center),
            ]),
            cell(&[
                Shape::anchored(Square, BLACK, 0, 0.0, Medium, Center),
                Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
            ]),
            cell(&[
                Shape::anchored(Triangle, BLACK, 0, 0.0, Medium, Center),
                Shape::anchored(Line, BLACK, 100, 45.0, Large, Center),
            ]),
            cell(&[
                Shape::anchored(Circle, BLACK, 0, 0.0, Medium, Center),
                Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
            ]),
            cell(&[
                Shape::anchored(Circle, BLACK, 0, 0.0, Medium, Center),
                Shape::anchored(Line, BLACK, 100, 0.0, Large, Center),
            ]),
            cell(&[
                Shape::anchored(Triangle, BLACK, 0, 0.0, Medium, Center),
                Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
            ]),
        ],
        hint: "Pay attention to the pattern of shapes and the orientation of the lines \
               within them. Notice how they change across rows and columns.",
    },
    Question {
        id: 7,
        matrix: [
            [
                Some(cell(&[
                    Shape::at(Triangle, BLACK, 0, 135.0, Smaller, 28.0, -15.0),
                    Shape::at(Triangle, BLACK, 100, -45.0, Smaller, -30.0, 18.0),
                    Shape::anchored(Line, BLACK, 100, 135.0, Large, Center),
                ])),
                Some(cell(&[
                    Shape::at(Triangle, BLACK, 0, 135.0, Smaller, -16.0, 28.0),
                    Shape::at(Triangle, BLACK, 100, -45.0, Smaller, 15.0, -28.0),
                    Shape::at(Triangle, BLACK, 0, 135.0, Smaller, 28.0, -15.0),
                    Shape::anchored(Line, BLACK, 100, 135.0, Large, Center),
                ])),
                Some(cell(&[
                    Shape::at(Triangle, BLACK, 100, 135.0, Smaller, 28.0, -15.0),
                    Shape::at(Triangle, BLACK, 100, -45.0, Smaller, 15.0, -28.0),
                    Shape::at(Triangle, BLACK, 100, -45.0, Smaller, -30.0, 16.0),
                    Shape::at(Triangle, BLACK, 100, 135.0, Smaller, -16.0, 30.0),
                    Shape::anchored(Line, BLACK, 100, 135.0, Large, Center),
                ])),
            ],
            [
                Some(cell(&[
                    Shape::at(Triangle, BLACK, 100, 135.0, Smaller, 28.0, -15.0),
                    Shape::at(Triangle, BLACK, 0, 135.0, Smaller, -16.0, 28.0),
                    Shape::anchored(Line, BLACK, 100, 135.0, Large, Center),
                ])),
                Some(cell(&[
                    Shape::at(Triangle, BLACK, 100, -45.0, Smaller, -30.0, 14.0),
                    Shape::at(Triangle, BLACK, 100, 135.0, Smaller, 28.0, -15.0),
                    Shape::at(Triangle, BLACK, 100, 135.0, Smaller, -16.0, 28.0),
                    Shape::anchored(Line, BLACK, 100, 135.0, Large, Center),
                ])),
                Some(cell(&[
                    Shape::at(Triangle, BLACK, 0, -45.0, Smaller, 15.0, -28.0),
                    Shape::at(Triangle, BLACK, 100, -45.0, Smaller, -28.0, 16.0),
                    Shape::anchored(Line, BLACK, 100, 135.0, Large, Center),
                ])),
            ],
            [
                Some(cell(&[
                    Shape::at(Triangle, BLACK, 100, -45.0, Smaller, -28.0, 16.0),
                    Shape::at(Triangle, BLACK, 100, 135.0, Smaller, 28.0, -15.0),
                    Shape::anchored(Line, BLACK, 100, 135.0, Large, Center),
                ])),
                Some(cell(&[
                    Shape::at(Triangle, BLACK, 0, -45.0, Smaller, 15.0, -28.0),
                    Shape::at(Triangle, BLACK, 100, 135.0, Smaller, -16.0, 28.0),
                    Shape::anchored(Line, BLACK, 100, 135.0, Large, Center),
                ])),
                None,
            ],
        ],
        answer: OptionKey::E,
        options: [
            cell(&[
                Shape::at(Triangle, BLACK, 0, -45.0, Smaller, 15.0, -28.0),
                Shape::at(Triangle, BLACK, 100, 135.0, Smaller, -16.0, 28.0),
                Shape::anchored(Line, BLACK, 100, 135.0, Large, Center),
            ]),
            cell(&[
                Shape::at(Triangle, BLACK, 0, 135.0, Smaller, 28.0, -15.0),
                Shape::at(Triangle, BLACK, 100, -45.0, Smaller, 15.0, -28.0),
                Shape::at(Triangle, BLACK, 100, -45.0, Smaller, -30.0, 16.0),
                Shape::at(Triangle, BLACK, 100, 135.0, Smaller, -16.0, 30.0),
                Shape::anchored(Line, BLACK, 100, 135.0, Large, Center),
            ]),
            cell(&[
                Shape::at(Triangle, BLACK, 0, 135.0, Smaller, -16.0, 28.0),
                Shape::at(Triangle, BLACK, 100, -45.0, Smaller, 15.0, -28.0),
                Shape::at(Triangle, BLACK, 0, 135.0, Smaller, 28.0, -15.0),
                Shape::anchored(Line, BLACK, 100, 135.0, Large, Center),
            ]),
            cell(&[
                Shape::at(Triangle, BLACK, 100, -45.0, Smaller, -30.0, 14.0),
                Shape::at(Triangle, BLACK, 0, 135.0, Smaller, 28.0, -15.0),
                Shape::at(Triangle, BLACK, 100, 135.0, Smaller, -16.0, 28.0),
                Shape::anchored(Line, BLACK, 100, 135.0, Large, Center),
            ]),
            cell(&[
                Shape::at(Triangle, BLACK, 0, -45.0, Smaller, -28.0, 14.0),
                Shape::at(Triangle, BLACK, 100, 135.0, Smaller, 28.0, -15.0),
                Shape::anchored(Line, BLACK, 100, 135.0, Large, Center),
            ]),
            cell(&[
                Shape::at(Triangle, BLACK, 100, 135.0, Smaller, 28.0, -15.0),
                Shape::at(Triangle, BLACK, 0, 135.0, Smaller, -16.0, 28.0),
                Shape::anchored(Line, BLACK, 100, 135.0, Large, Center),
            ]),
        ],
        hint: "Pay attention to the sideways upper-right to bottom-left area and see \
               if you can find the pattern there.",
    },
    Question {
        id: 8,
        matrix: [
            [
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 90.0, Medium, MiddleLeft),
                    Shape::anchored(Line, BLACK, 100, 90.0, Medium, MiddleRight),
                    Shape::anchored(Line, BLACK, 100, 0.0, Medium, BottomCenter),
                ])),
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 0.0, Medium, TopCenter),
                    Shape::anchored(Line, BLACK, 100, 0.0, Medium, BottomCenter),
                    Shape::anchored(Line, BLACK, 100, 135.0, Medium, Center),
                ])),
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 0.0, Medium, TopCenter),
                    Shape::anchored(Line, BLACK, 100, 90.0, Medium, MiddleLeft),
                    Shape::anchored(Line, BLACK, 100, 90.0, Medium, MiddleRight),
                    Shape::anchored(Line, BLACK, 100, 135.0, Medium, Center),
                ])),
            ],
            [
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 0.0, Medium, BottomCenter),
                    Shape::anchored(Line, BLACK, 100, 90.0, Medium, MiddleRight),
                    Shape::anchored(Line, BLACK, 100, 0.0, Medium, TopCenter),
                    Shape::anchored(Line, BLACK, 100, 135.0, Medium, Center),
                ])),
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 0.0, Medium, TopCenter),
                    Shape::anchored(Line, BLACK, 100, 90.0, Medium, MiddleRight),
                    Shape::anchored(Line, BLACK, 100, 45.0, Medium, Center),
                ])),
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 0.0, Medium, BottomCenter),
                    Shape::anchored(Line, BLACK, 100, 45.0, Medium, Center),
                    Shape::anchored(Line, BLACK, 100, 135.0, Medium, Center),
                ])),
            ],
            [
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 90.0, Medium, MiddleLeft),
                    Shape::anchored(Line, BLACK, 100, 0.0, Medium, TopCenter),
                    Shape::anchored(Line, BLACK, 100, 135.0, Medium, Center),
                ])),
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 90.0, Medium, MiddleRight),
                    Shape::anchored(Line, BLACK, 100, 0.0, Medium, BottomCenter),
                    Shape::anchored(Line, BLACK, 100, 45.0, Medium, Center),
                    Shape::anchored(Line, BLACK, 100, 135.0, Medium, Center),
                ])),
                None,
            ],
        ],
        answer: OptionKey::F,
        options: [
            cell(&[
                Shape::anchored(Line, BLACK, 100, 90.0, Medium, MiddleLeft),
                Shape::anchored(Line, BLACK, 100, 0.0, Medium, BottomCenter),
                Shape::anchored(Line, BLACK, 100, 45.0, Medium, Center),
                Shape::anchored(Line, BLACK, 100, 135.0, Medium, Center),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 0.0, Medium, MiddleLeft),
                Shape::anchored(Line, BLACK, 100, 0.0, Medium, MiddleRight),
                Shape::anchored(Line, BLACK, 100, 90.0, Medium, TopCenter),
                Shape::anchored(Line, BLACK, 100, 90.0, Medium, BottomCenter),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 45.0, Medium, TopLeft),
                Shape::anchored(Line, BLACK, 100, 45.0, Medium, BottomRight),
                Shape::anchored(Line, BLACK, 100, -45.0, Medium, TopRight),
                Shape::anchored(Line, BLACK, 100, -45.0, Medium, BottomLeft),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 45.0, Medium, TopLeft),
                Shape::anchored(Line, BLACK, 100, 45.0, Medium, TopRight),
                Shape::anchored(Line, BLACK, 100, 45.0, Medium, BottomLeft),
                Shape::anchored(Line, BLACK, 100, 45.0, Medium, BottomRight),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 0.0, Medium, TopCenter),
                Shape::anchored(Line, BLACK, 100, 0.0, Medium, BottomCenter),
                Shape::anchored(Line, BLACK, 100, 90.0, Medium, MiddleLeft),
                Shape::anchored(Line, BLACK, 100, 90.0, Medium, MiddleRight),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 0.0, Medium, TopCenter),
                Shape::anchored(Line, BLACK, 100, 90.0, Medium, MiddleLeft),
                Shape::anchored(Line, BLACK, 100, 90.0, Medium, MiddleRight),
                Shape::anchored(Line, BLACK, 100, 0.0, Medium, BottomCenter),
                Shape::anchored(Line, BLACK, 100, 45.0, Medium, Center),
            ]),
        ],
        hint: "Addition and Subtraction are always useful tools",
    },
    Question {
        id: 9,
        matrix: [
            [
                Some(cell(&[
                    Shape::anchored(Square, BLACK, 100, 0.0, Smaller, MiddleLeft),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, Center),
                    Shape::anchored(Triangle, BLACK, 0, 0.0, Smaller, MiddleRight),
                ])),
                Some(cell(&[
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleLeft),
                    Shape::anchored(Square, BLACK, 0, 0.0, Smaller, Center),
                    Shape::anchored(Triangle, BLACK, 100, 0.0, Smaller, MiddleRight),
                ])),
                Some(cell(&[
                    Shape::anchored(Triangle, BLACK, 0, 0.0, Smaller, MiddleLeft),
                    Shape::anchored(Triangle, BLACK, 0, 0.0, Smaller, Center),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleRight),
                ])),
            ],
            [
                Some(cell(&[
                    Shape::anchored(Square, BLACK, 0, 0.0, Smaller, MiddleLeft),
                    Shape::anchored(Triangle, BLACK, 100, 0.0, Smaller, Center),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleRight),
                ])),
                Some(cell(&[
                    Shape::anchored(Triangle, BLACK, 0, 0.0, Smaller, MiddleLeft),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, Center),
                    Shape::anchored(Triangle, BLACK, 0, 0.0, Smaller, MiddleRight),
                ])),
                Some(cell(&[
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleLeft),
                    Shape::anchored(Triangle, BLACK, 0, 0.0, Smaller, Center),
                    Shape::anchored(Square, BLACK, 100, 0.0, Smaller, MiddleRight),
                ])),
            ],
            [
                Some(cell(&[
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleLeft),
                    Shape::anchored(Triangle, BLACK, 0, 0.0, Smaller, Center),
                    Shape::anchored(Triangle, BLACK, 0, 0.0, Smaller, MiddleRight),
                ])),
                Some(cell(&[
                    Shape::anchored(Triangle, BLACK, 0, 0.0, Smaller, MiddleLeft),
                    Shape::anchored(Square, BLACK, 100, 0.0, Smaller, Center),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleRight),
                ])),
                None,
            ],
        ],
        answer: OptionKey::A,
        options: [
            cell(&[
                Shape::anchored(Triangle, BLACK, 100, 0.0, Smaller, MiddleLeft),
                Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, Center),
                Shape::anchored(Square, BLACK, 0, 0.0, Smaller, MiddleRight),
            ]),
            cell(&[
                Shape::anchored(Square, BLACK, 100, 0.0, Smaller, MiddleLeft),
                Shape::anchored(Triangle, BLACK, 0, 0.0, Smaller, Center),
                Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleRight),
            ]),
            cell(&[
                Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleLeft),
                Shape::anchored(Square, BLACK, 100, 0.0, Smaller, Center),
                Shape::anchored(Triangle, BLACK, 0, 0.0, Smaller, MiddleRight),
            ]),
            cell(&[
                Shape::anchored(Square, BLACK, 100, 0.0, Smaller, MiddleLeft),
                Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, Center),
                Shape::anchored(Triangle, BLACK, 0, 0.0, Smaller, MiddleRight),
            ]),
            cell(&[
                Shape::anchored(Triangle, BLACK, 0, 0.0, Smaller, MiddleLeft),
                Shape::anchored(Triangle, BLACK, 0, 0.0, Smaller, Center),
                Shape::anchored(Square, BLACK, 100, 0.0, Smaller, MiddleRight),
            ]),
            cell(&[
                Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleLeft),
                Shape::anchored(Square, BLACK, 100, 0.0, Smaller, Center),
                Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleRight),
            ]),
        ],
        hint: "Sometimes there can be multiple patterns, some going vertically while \
               others are going sideways",
    },
    Question {
        id: 10,
        matrix: [
            [
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleLeft),
                    Shape::anchored(Circle, BLACK, 0, 0.0, Smaller, BottomLeft),
                ])),
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleLeft),
                    Shape::anchored(Circle, BLACK, 0, 0.0, Smaller, MiddleRight),
                    Shape::anchored(Circle, BLACK, 0, 0.0, Smaller, BottomRight),
                ])),
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                    Shape::anchored(Circle, BLACK, 0, 0.0, Smaller, TopLeft),
                    Shape::anchored(Circle, BLACK, 0, 0.0, Smaller, TopRight),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleRight),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, BottomLeft),
                ])),
            ],
            [
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleLeft),
                    Shape::anchored(Circle, BLACK, 0, 0.0, Smaller, BottomLeft),
                    Shape::anchored(Circle, BLACK, 0, 0.0, Smaller, BottomRight),
                ])),
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                    Shape::anchored(Circle, BLACK, 0, 0.0, Smaller, TopRight),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleRight),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, BottomLeft),
                ])),
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                    Shape::anchored(Circle, BLACK, 0, 0.0, Smaller, TopLeft),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleLeft),
                ])),
            ],
            [
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleRight),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, BottomLeft),
                    Shape::anchored(Circle, BLACK, 0, 0.0, Smaller, BottomRight),
                ])),
                Some(cell(&[
                    Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                    Shape::anchored(Circle, BLACK, 0, 0.0, Smaller, TopLeft),
                    Shape::anchored(Circle, BLACK, 0, 0.0, Smaller, TopRight),
                    Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleLeft),
                ])),
                None,
            ],
        ],
        answer: OptionKey::A,
        options: [
            cell(&[
                Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleLeft),
                Shape::anchored(Circle, BLACK, 0, 0.0, Smaller, BottomLeft),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                Shape::anchored(Circle, BLACK, 0, 0.0, Smaller, TopLeft),
                Shape::anchored(Circle, BLACK, 0, 0.0, Smaller, TopRight),
                Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleLeft),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                Shape::anchored(Circle, BLACK, 0, 0.0, Smaller, TopLeft),
                Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleRight),
                Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, BottomLeft),
                Shape::anchored(Circle, BLACK, 0, 0.0, Smaller, BottomRight),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleRight),
                Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, BottomLeft),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                Shape::anchored(Circle, BLACK, 0, 0.0, Smaller, TopLeft),
                Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleLeft),
                Shape::anchored(Circle, BLACK, 0, 0.0, Smaller, TopRight),
            ]),
            cell(&[
                Shape::anchored(Line, BLACK, 100, 90.0, Large, Center),
                Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, TopLeft),
                Shape::anchored(Circle, BLACK, 100, 0.0, Smaller, MiddleRight),
                Shape::anchored(Circle, BLACK, 0, 0.0, Smaller, BottomLeft),
            ]),
        ],
        hint: "Snakes are an interesting animal, I like the way that they slither and \
               hide beneath things",
    },
];

/// Authoring defects. These can only come from a bad edit to the catalog
/// above, never from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    MissingHole { id: u32 },
    UnexpectedHole { id: u32, row: usize, col: usize },
    FillOutOfRange { id: u32, fill: u8 },
    NonSequentialId { index: usize, id: u32 },
    EmptyHint { id: u32 },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::MissingHole { id } => {
                write!(f, "question {id} has no blank slot in the last position")
            }
            CatalogError::UnexpectedHole { id, row, col } => {
                write!(f, "question {id} has a blank slot at ({row}, {col})")
            }
            CatalogError::FillOutOfRange { id, fill } => {
                write!(f, "question {id} has a shape with fill {fill}, expected 0-100")
            }
            CatalogError::NonSequentialId { index, id } => {
                write!(
                    f,
                    "question at position {index} has id {id}, expected {}",
                    index + 1
                )
            }
            CatalogError::EmptyHint { id } => {
                write!(f, "question {id} has an empty hint")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

pub fn validate_question(question: &Question) -> Result<(), CatalogError> {
    let id = question.id;
    for (row, cells) in question.matrix.iter().enumerate() {
        for (col, slot) in cells.iter().enumerate() {
            if slot.is_none() && (row, col) != (2, 2) {
                return Err(CatalogError::UnexpectedHole { id, row, col });
            }
        }
    }
    if question.matrix[2][2].is_some() {
        return Err(CatalogError::MissingHole { id });
    }
    let matrix_shapes = question
        .matrix
        .iter()
        .flatten()
        .flatten()
        .flat_map(|cell| cell.shapes.iter());
    let option_shapes = question.options.iter().flat_map(|cell| cell.shapes.iter());
    for shape in matrix_shapes.chain(option_shapes) {
        if shape.fill > 100 {
            return Err(CatalogError::FillOutOfRange {
                id,
                fill: shape.fill,
            });
        }
    }
    if question.hint.trim().is_empty() {
        return Err(CatalogError::EmptyHint { id });
    }
    Ok(())
}

pub fn validate_catalog() -> Result<(), CatalogError> {
    for (index, question) in QUESTION_CATALOG.iter().enumerate() {
        if question.id as usize != index + 1 {
            return Err(CatalogError::NonSequentialId {
                index,
                id: question.id,
            });
        }
        validate_question(question)?;
    }
    Ok(())
}
