use glam::Vec3;

use crate::types::CameraUniform;

pub const ORBIT_SPEED: f32 = 0.005;
const PITCH_LIMIT: f32 = 1.5;
const MIN_DISTANCE: f32 = 2.0;

/// Perspective editor camera orbiting the scene origin.
///
/// Projection parameters are fixed apart from the aspect ratio, which the
/// resize handler keeps in sync with the window.
pub struct Camera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        // Initial eye position (5, 5, 10) looking at the origin.
        let eye = Vec3::new(5.0, 5.0, 10.0);
        let distance = eye.length();
        let pitch = (eye.y / distance).asin();
        let yaw = eye.x.atan2(eye.z);

        Self {
            target: Vec3::ZERO,
            yaw,
            pitch,
            distance,
            fov_y: 75.0_f32.to_radians(),
            aspect,
            near: 0.1,
            far: 1000.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        let offset = Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        );
        self.target + offset * self.distance
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position()).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    /// Orbit around the target by a mouse drag delta in pixels.
    pub fn orbit(&mut self, delta_x: f32, delta_y: f32) {
        self.yaw -= delta_x * ORBIT_SPEED;
        self.pitch = (self.pitch + delta_y * ORBIT_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Dolly toward or away from the target.
    pub fn zoom(&mut self, amount: f32) {
        self.distance = (self.distance - amount).max(MIN_DISTANCE);
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// World-space ray direction through a point in normalized device
    /// coordinates (x and y in [-1, 1], y pointing up).
    pub fn ray_through_ndc(&self, ndc_x: f32, ndc_y: f32) -> Vec3 {
        let tan_half_fov = (self.fov_y * 0.5).tan();
        (self.forward()
            + self.right() * ndc_x * tan_half_fov * self.aspect
            + self.up() * ndc_y * tan_half_fov)
            .normalize()
    }

    pub fn to_uniform(&self, shape_count: u32) -> CameraUniform {
        CameraUniform {
            position: self.position().to_array(),
            tan_half_fov: (self.fov_y * 0.5).tan(),
            forward: self.forward().to_array(),
            aspect: self.aspect,
            right: self.right().to_array(),
            shape_count,
            up: self.up().to_array(),
            _pad: 0.0,
        }
    }
}
