use crate::registry::SceneRegistry;

/// Ground-level spawn height for a unit-height shape resting on the floor.
pub const FLOOR_HEIGHT: f32 = 0.5;

/// Horizontal half-width of the footprint checked around the origin.
const ORIGIN_FOOTPRINT: f32 = 0.6;

/// Height assumed for geometries with no height parameter (spheres).
const DEFAULT_HEIGHT: f32 = 1.0;

/// Spawn height for a new shape at the origin.
///
/// This is a stacking heuristic, not collision avoidance: only shapes whose
/// horizontal position lies within the origin footprint are considered, and
/// the candidate is raised to clear each of their top surfaces.
pub fn spawn_height(registry: &SceneRegistry) -> f32 {
    let mut height = FLOOR_HEIGHT;

    for (_, shape) in registry.iter() {
        if shape.position.x.abs() < ORIGIN_FOOTPRINT && shape.position.z.abs() < ORIGIN_FOOTPRINT {
            let top = shape.position.y + shape.kind.height_param().unwrap_or(DEFAULT_HEIGHT);
            height = height.max(top);
        }
    }

    height
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::shape::{Shape, ShapeKind};

    fn shape_at(kind: ShapeKind, x: f32, y: f32, z: f32) -> Shape {
        Shape::new(kind, Vec3::new(x, y, z), [0.5, 0.5, 0.5])
    }

    #[test]
    fn test_empty_registry_spawns_on_floor() {
        let registry = SceneRegistry::new();
        assert_eq!(spawn_height(&registry), 0.5);
    }

    #[test]
    fn test_stacking_three_shapes_at_origin() {
        let mut registry = SceneRegistry::new();

        let first = spawn_height(&registry);
        assert_eq!(first, 0.5);
        registry.add(shape_at(ShapeKind::Cube, 0.0, first, 0.0));

        let second = spawn_height(&registry);
        assert_eq!(second, 1.5);
        registry.add(shape_at(ShapeKind::Cube, 0.0, second, 0.0));

        let third = spawn_height(&registry);
        assert_eq!(third, 2.5);
    }

    #[test]
    fn test_shapes_outside_footprint_are_ignored() {
        let mut registry = SceneRegistry::new();
        registry.add(shape_at(ShapeKind::Cube, 2.0, 0.5, 0.0));
        registry.add(shape_at(ShapeKind::Cube, 0.0, 0.5, -1.0));
        assert_eq!(spawn_height(&registry), 0.5);
    }

    #[test]
    fn test_footprint_checks_both_axes() {
        let mut registry = SceneRegistry::new();
        // Inside on x, outside on z: ignored.
        registry.add(shape_at(ShapeKind::Cube, 0.3, 0.5, 0.7));
        assert_eq!(spawn_height(&registry), 0.5);
    }

    #[test]
    fn test_sphere_uses_default_height() {
        let mut registry = SceneRegistry::new();
        registry.add(shape_at(ShapeKind::Sphere, 0.0, 0.5, 0.0));
        assert_eq!(spawn_height(&registry), 1.5);
    }

    #[test]
    fn test_returns_tallest_candidate() {
        let mut registry = SceneRegistry::new();
        registry.add(shape_at(ShapeKind::Cube, 0.0, 0.5, 0.0));
        registry.add(shape_at(ShapeKind::Cube, 0.1, 2.5, 0.1));
        registry.add(shape_at(ShapeKind::Cube, -0.2, 1.5, 0.0));
        assert_eq!(spawn_height(&registry), 3.5);
    }
}
