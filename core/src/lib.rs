pub mod catalog;
pub mod layout;
pub mod quiz;
pub mod render;
pub mod scene;

pub use catalog::{question_by_id, validate_catalog, CatalogError, QUESTION_CATALOG};
pub use layout::{resolve_placement, Anchor};
pub use quiz::{Answer, OptionKey, Question, Quiz};
pub use scene::{Cell, Placement, Shape, ShapeKind, ShapeSize};
