use glam::Vec3;

use crate::movement::STEP;
use crate::registry::{SceneRegistry, ShapeKey};

/// Whether moving `mover` to `candidate` would collide with another shape.
///
/// The rule is deliberately permissive: a move is blocked only when the
/// mover's translated box overlaps the other shape's box AND the translated
/// box is closer than one step to that shape's position anchor. Boxes that
/// overlap by less than a step may still slide past each other.
pub fn move_blocked(registry: &SceneRegistry, mover: ShapeKey, candidate: Vec3) -> bool {
    let Some(shape) = registry.get(mover) else {
        return false;
    };
    let moved_box = shape.bounds_at(candidate);

    for (key, other) in registry.iter() {
        if key == mover {
            continue;
        }

        let other_box = other.bounds();
        let anchor_distance = moved_box.distance_to_point(other.position);

        if moved_box.intersects(&other_box) && anchor_distance < STEP {
            return true;
        }
    }

    false
}
