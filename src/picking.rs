use crate::camera::Camera;
use crate::math::intersect_aabb;
use crate::registry::{SceneRegistry, ShapeKey};

/// Converts viewport pixel coordinates to normalized device coordinates.
/// Pixel y grows downward, NDC y grows upward.
pub fn pixel_to_ndc(px: f32, py: f32, width: f32, height: f32) -> (f32, f32) {
    let x = (px / width) * 2.0 - 1.0;
    let y = -(py / height) * 2.0 + 1.0;
    (x, y)
}

/// Resolves a click to the nearest registered shape hit by the camera ray,
/// or `None` when the ray passes through empty space.
pub fn pick(
    registry: &SceneRegistry,
    camera: &Camera,
    ndc_x: f32,
    ndc_y: f32,
) -> Option<ShapeKey> {
    let origin = camera.position();
    let dir = camera.ray_through_ndc(ndc_x, ndc_y);

    let mut nearest: Option<(ShapeKey, f32)> = None;
    for (key, shape) in registry.iter() {
        if let Some(t) = intersect_aabb(origin, dir, &shape.bounds()) {
            if nearest.map_or(true, |(_, best)| t < best) {
                nearest = Some((key, t));
            }
        }
    }

    nearest.map(|(key, _)| key)
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::shape::{Shape, ShapeKind};

    #[test]
    fn test_pixel_to_ndc_corners() {
        assert_eq!(pixel_to_ndc(0.0, 0.0, 800.0, 600.0), (-1.0, 1.0));
        assert_eq!(pixel_to_ndc(800.0, 600.0, 800.0, 600.0), (1.0, -1.0));
        assert_eq!(pixel_to_ndc(400.0, 300.0, 800.0, 600.0), (0.0, 0.0));
    }

    #[test]
    fn test_center_click_hits_shape_at_target() {
        let mut registry = SceneRegistry::new();
        let key = registry.add(Shape::new(ShapeKind::Cube, Vec3::ZERO, [0.5, 0.5, 0.5]));
        let camera = Camera::new(1.0);

        // The camera looks at the origin, so the center ray must hit a cube
        // sitting there.
        assert_eq!(pick(&registry, &camera, 0.0, 0.0), Some(key));
    }

    #[test]
    fn test_miss_returns_none() {
        let mut registry = SceneRegistry::new();
        registry.add(Shape::new(ShapeKind::Cube, Vec3::ZERO, [0.5, 0.5, 0.5]));
        let camera = Camera::new(1.0);

        // Corner ray pointing well away from the origin.
        assert_eq!(pick(&registry, &camera, 1.0, 1.0), None);
    }

    #[test]
    fn test_empty_registry_returns_none() {
        let registry = SceneRegistry::new();
        let camera = Camera::new(1.0);
        assert_eq!(pick(&registry, &camera, 0.0, 0.0), None);
    }

    #[test]
    fn test_nearest_hit_wins() {
        let mut registry = SceneRegistry::new();
        // Two cubes stacked along the view ray; the camera sits at roughly
        // (5, 5, 10), so the one further from the origin is closer to it.
        let far = registry.add(Shape::new(ShapeKind::Cube, Vec3::ZERO, [0.5, 0.5, 0.5]));
        let near = registry.add(Shape::new(
            ShapeKind::Cube,
            Vec3::new(2.0, 2.0, 4.0),
            [0.5, 0.5, 0.5],
        ));
        let camera = Camera::new(1.0);

        let picked = pick(&registry, &camera, 0.0, 0.0);
        assert_eq!(picked, Some(near));
        assert_ne!(picked, Some(far));
    }
}
