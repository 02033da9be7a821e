use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use rand::Rng;

use crate::error::EditorError;
use crate::math::Aabb;

/// The primitive geometries the editor can spawn.
///
/// Canonical dimensions are fixed: a unit cube, a cylinder with radius 0.5
/// and height 1, and a sphere with radius 0.5.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Cube,
    Cylinder,
    Sphere,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Cube, ShapeKind::Cylinder, ShapeKind::Sphere];

    /// Selector label, also shown in the selection status line.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Sphere => "sphere",
        }
    }

    /// Half extents of the geometry's local bounding box.
    pub fn half_extents(&self) -> Vec3 {
        match self {
            ShapeKind::Cube => Vec3::splat(0.5),
            ShapeKind::Cylinder => Vec3::new(0.5, 0.5, 0.5),
            ShapeKind::Sphere => Vec3::splat(0.5),
        }
    }

    /// Vertical extent of the geometry, when the primitive has one.
    /// Spheres are parameterized by radius only.
    pub fn height_param(&self) -> Option<f32> {
        match self {
            ShapeKind::Cube => Some(1.0),
            ShapeKind::Cylinder => Some(1.0),
            ShapeKind::Sphere => None,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShapeKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cube" => Ok(ShapeKind::Cube),
            "cylinder" => Ok(ShapeKind::Cylinder),
            "sphere" => Ok(ShapeKind::Sphere),
            other => Err(EditorError::InvalidShapeKind(other.to_string())),
        }
    }
}

/// A placed primitive: geometry kind, world position, material color.
#[derive(Copy, Clone, Debug)]
pub struct Shape {
    pub kind: ShapeKind,
    pub position: Vec3,
    pub color: [f32; 3],
}

impl Shape {
    pub fn new(kind: ShapeKind, position: Vec3, color: [f32; 3]) -> Self {
        Self {
            kind,
            position,
            color,
        }
    }

    /// New shape with a uniformly random RGB material.
    pub fn with_random_color(kind: ShapeKind, position: Vec3) -> Self {
        let mut rng = rand::rng();
        let color = [rng.random::<f32>(), rng.random::<f32>(), rng.random::<f32>()];
        Self::new(kind, position, color)
    }

    /// World-space bounding box at the shape's current position.
    pub fn bounds(&self) -> Aabb {
        self.bounds_at(self.position)
    }

    /// World-space bounding box the shape would have at `position`.
    pub fn bounds_at(&self, position: Vec3) -> Aabb {
        Aabb::from_center_half_extents(position, self.kind.half_extents())
    }
}
