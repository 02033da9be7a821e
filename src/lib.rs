pub mod camera;
pub mod cli;
pub mod collision;
pub mod editor;
pub mod error;
pub mod math;
pub mod movement;
pub mod picking;
pub mod placement;
pub mod registry;
pub mod renderer;
pub mod selection;
pub mod shape;
pub mod types;

pub use editor::EditorState;
pub use error::EditorError;
pub use movement::{Direction, MoveOutcome};
pub use shape::{Shape, ShapeKind};
