use glam::Vec3;

use super::Aabb;

/// Slab-method ray/AABB intersection.
///
/// Returns the distance along the ray to the nearest hit, or `None` when the
/// ray misses the box or the box lies entirely behind the origin. A ray
/// starting inside the box reports the exit distance.
pub fn intersect_aabb(ray_origin: Vec3, ray_dir: Vec3, aabb: &Aabb) -> Option<f32> {
    const EPSILON: f32 = 1e-8;

    // Clamp near-zero direction components so the division stays finite.
    let inv_dir = Vec3::new(
        if ray_dir.x.abs() < EPSILON { 1.0 / EPSILON.copysign(ray_dir.x) } else { 1.0 / ray_dir.x },
        if ray_dir.y.abs() < EPSILON { 1.0 / EPSILON.copysign(ray_dir.y) } else { 1.0 / ray_dir.y },
        if ray_dir.z.abs() < EPSILON { 1.0 / EPSILON.copysign(ray_dir.z) } else { 1.0 / ray_dir.z },
    );

    let t_min = (aabb.min - ray_origin) * inv_dir;
    let t_max = (aabb.max - ray_origin) * inv_dir;

    let t1 = t_min.min(t_max);
    let t2 = t_min.max(t_max);

    let t_near = t1.x.max(t1.y).max(t1.z);
    let t_far = t2.x.min(t2.y).min(t2.z);

    if t_near > t_far || t_far < 0.0 {
        return None;
    }

    if t_near < 0.0 {
        if t_far > 0.001 {
            Some(t_far)
        } else {
            None
        }
    } else {
        Some(t_near)
    }
}
