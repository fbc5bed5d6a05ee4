//! Spherical perspective camera
//!
//! The camera sits at a world position and looks along the direction given
//! by its yaw and pitch angles (degrees). Yaw 90 with pitch 0 looks down -Z.
//! Zooming changes the vertical field of view rather than moving the camera.

use glyph3d_input::CameraControl;
use glyph3d_math::{clamp_pitch, look_direction, wrap_yaw, Mat4, Vec3};

use crate::pipeline::CameraUniforms;

/// Camera for viewing the scene
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    fov: f32,

    pub near: f32,
    pub far: f32,
    pub pitch_limit: f32,
    pub min_fov: f32,
    pub max_fov: f32,

    // Restored by reset()
    home_position: Vec3,
    home_yaw: f32,
    home_pitch: f32,
    home_fov: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Create a camera at the default viewpoint
    pub fn new() -> Self {
        let position = Vec3::new(0.6, 1.0, 10.0);
        Self {
            position,
            yaw: 90.0,
            pitch: 0.0,
            fov: 45.0,

            near: 0.01,
            far: 100.0,
            pitch_limit: 85.0,
            min_fov: 1.0,
            max_fov: 45.0,

            home_position: position,
            home_yaw: 90.0,
            home_pitch: 0.0,
            home_fov: 45.0,
        }
    }

    /// Builder: set the starting position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self.home_position = position;
        self
    }

    /// Builder: set the starting yaw and pitch (degrees)
    pub fn with_angles(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = wrap_yaw(yaw);
        self.pitch = clamp_pitch(pitch, self.pitch_limit);
        self.home_yaw = self.yaw;
        self.home_pitch = self.pitch;
        self
    }

    /// Builder: set the field of view limits and starting value (degrees)
    pub fn with_fov(mut self, fov: f32, min_fov: f32, max_fov: f32) -> Self {
        self.min_fov = min_fov;
        self.max_fov = max_fov;
        self.fov = fov.clamp(min_fov, max_fov);
        self.home_fov = self.fov;
        self
    }

    /// Builder: set the clip planes
    pub fn with_clip_planes(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// Builder: set the pitch limit (degrees either side of level)
    pub fn with_pitch_limit(mut self, limit: f32) -> Self {
        self.pitch_limit = limit;
        self.pitch = clamp_pitch(self.pitch, limit);
        self.home_pitch = self.pitch;
        self
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Unit vector the camera looks along
    pub fn front(&self) -> Vec3 {
        look_direction(self.yaw, self.pitch)
    }

    /// World to view transform
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front(), Vec3::Y)
    }

    /// View to clip transform for the given aspect ratio
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), aspect, self.near, self.far)
    }

    /// GPU uniforms for the given aspect ratio
    pub fn uniforms(&self, aspect: f32) -> CameraUniforms {
        CameraUniforms {
            view: self.view_matrix().to_cols_array_2d(),
            projection: self.projection_matrix(aspect).to_cols_array_2d(),
        }
    }

    /// Return to the starting viewpoint
    pub fn reset(&mut self) {
        self.position = self.home_position;
        self.yaw = self.home_yaw;
        self.pitch = self.home_pitch;
        self.fov = self.home_fov;
    }
}

impl CameraControl for Camera {
    fn pan(&mut self, delta_x: f32, delta_z: f32) {
        self.position.x += delta_x;
        self.position.z += delta_z;
    }

    fn zoom(&mut self, delta_fov: f32) {
        self.fov = (self.fov + delta_fov).clamp(self.min_fov, self.max_fov);
    }

    fn tilt(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw = wrap_yaw(self.yaw + delta_yaw);
        self.pitch = clamp_pitch(self.pitch + delta_pitch, self.pitch_limit);
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}
