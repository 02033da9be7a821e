use glam::Vec3;
use winit::keyboard::KeyCode;

use crate::collision::move_blocked;
use crate::registry::SceneRegistry;
use crate::selection::Selection;

/// Fixed translation increment per direction command, in world units.
pub const STEP: f32 = 0.5;

/// Discrete movement command for the selected shape.
///
/// Forward/backward run along the horizontal depth axis (negative/positive z),
/// up/down along the vertical axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Forward,
    Backward,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Backward,
        Direction::Up,
        Direction::Down,
    ];

    /// Signed axis-aligned position delta for one step.
    pub fn delta(&self) -> Vec3 {
        match self {
            Direction::Left => Vec3::new(-STEP, 0.0, 0.0),
            Direction::Right => Vec3::new(STEP, 0.0, 0.0),
            Direction::Forward => Vec3::new(0.0, 0.0, -STEP),
            Direction::Backward => Vec3::new(0.0, 0.0, STEP),
            Direction::Up => Vec3::new(0.0, STEP, 0.0),
            Direction::Down => Vec3::new(0.0, -STEP, 0.0),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Forward => "forward",
            Direction::Backward => "backward",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Keyboard mapping: A/D strafe, W/S move along depth, Shift switches
    /// W/S to vertical movement. Unmapped keys return `None`.
    pub fn from_key(code: KeyCode, shift_held: bool) -> Option<Direction> {
        match (code, shift_held) {
            (KeyCode::KeyA, false) => Some(Direction::Left),
            (KeyCode::KeyD, false) => Some(Direction::Right),
            (KeyCode::KeyW, false) => Some(Direction::Forward),
            (KeyCode::KeyS, false) => Some(Direction::Backward),
            (KeyCode::KeyW, true) => Some(Direction::Up),
            (KeyCode::KeyS, true) => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Result of a movement command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The shape was translated by one step.
    Moved,
    /// The collision check rejected the candidate position.
    Blocked,
    /// Nothing is selected (or the selection no longer resolves).
    NoSelection,
}

/// Applies one direction command to the selected shape, committing the move
/// only when the collision check approves the candidate position.
pub fn try_move(
    registry: &mut SceneRegistry,
    selection: &Selection,
    direction: Direction,
) -> MoveOutcome {
    let Some(key) = selection.key().filter(|&k| registry.contains(k)) else {
        return MoveOutcome::NoSelection;
    };

    let candidate = match registry.get(key) {
        Some(shape) => shape.position + direction.delta(),
        None => return MoveOutcome::NoSelection,
    };

    if move_blocked(registry, key, candidate) {
        return MoveOutcome::Blocked;
    }

    if let Some(shape) = registry.get_mut(key) {
        shape.position = candidate;
    }
    MoveOutcome::Moved
}
