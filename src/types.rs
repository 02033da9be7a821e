use crate::shape::{Shape, ShapeKind};

/// Camera uniform buffer data for the compute shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub position: [f32; 3],
    pub tan_half_fov: f32,
    pub forward: [f32; 3],
    pub aspect: f32,
    pub right: [f32; 3],
    pub shape_count: u32,
    pub up: [f32; 3],
    pub _pad: f32,
}

pub const SHAPE_KIND_CUBE: u32 = 0;
pub const SHAPE_KIND_CYLINDER: u32 = 1;
pub const SHAPE_KIND_SPHERE: u32 = 2;

/// Shape primitive data for the GPU storage buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeData {
    pub position: [f32; 3],
    pub kind: u32,
    pub half_extents: [f32; 3],
    pub selected: u32,
    pub color: [f32; 3],
    pub _pad: f32,
}

impl ShapeData {
    pub fn from_shape(shape: &Shape, selected: bool) -> Self {
        let kind = match shape.kind {
            ShapeKind::Cube => SHAPE_KIND_CUBE,
            ShapeKind::Cylinder => SHAPE_KIND_CYLINDER,
            ShapeKind::Sphere => SHAPE_KIND_SPHERE,
        };
        Self {
            position: shape.position.to_array(),
            kind,
            half_extents: shape.kind.half_extents().to_array(),
            selected: selected as u32,
            color: shape.color,
            _pad: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn test_shape_data_layout() {
        assert_eq!(std::mem::size_of::<ShapeData>(), 48);
        assert_eq!(std::mem::size_of::<CameraUniform>(), 64);
    }

    #[test]
    fn test_from_shape_kind_tags() {
        let cube = Shape::new(ShapeKind::Cube, Vec3::ZERO, [1.0, 0.0, 0.0]);
        let sphere = Shape::new(ShapeKind::Sphere, Vec3::ZERO, [0.0, 1.0, 0.0]);
        assert_eq!(ShapeData::from_shape(&cube, false).kind, SHAPE_KIND_CUBE);
        assert_eq!(ShapeData::from_shape(&sphere, true).kind, SHAPE_KIND_SPHERE);
        assert_eq!(ShapeData::from_shape(&sphere, true).selected, 1);
    }
}
