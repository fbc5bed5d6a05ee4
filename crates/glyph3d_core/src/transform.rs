//! Per-object transform record
//!
//! An ObjectTransform is the only state a letter/ID model carries between
//! frames: a uniform scale, a position and a yaw angle in degrees. The model
//! matrix is rebuilt from these numbers every frame, so repeated edits never
//! accumulate floating point drift.

use glyph3d_math::{rotation_degrees, translation, uniform_scaling, Axis, Mat4, Vec3};

/// Smallest scale the object controls can reach
pub const MIN_SCALE: f32 = 0.01;

/// Angles (object yaw and world rotation) are clamped to +/- this many degrees
pub const ANGLE_LIMIT: f32 = 360.0;

/// Scale, position and yaw of a single model
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectTransform {
    /// Uniform scale factor
    pub scale: f32,
    /// Offset from the model's placed position
    pub position: Vec3,
    /// Rotation about +Y in degrees
    pub angle: f32,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ObjectTransform {
    /// Unit scale, no offset, no rotation
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            position: Vec3::ZERO,
            angle: 0.0,
        }
    }

    /// Transform with just a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Compose `T(position) * Ry(angle) * S(scale)`
    pub fn matrix(&self) -> Mat4 {
        translation(self.position)
            * rotation_degrees(Axis::Y, self.angle)
            * uniform_scaling(self.scale)
    }

    /// Grow or shrink by `delta`, never going below [`MIN_SCALE`]
    pub fn adjust_scale(&mut self, delta: f32) {
        self.scale = (self.scale + delta).max(MIN_SCALE);
    }

    /// Move by `offset`
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Turn by `delta` degrees, clamped to [`ANGLE_LIMIT`]
    pub fn rotate(&mut self, delta: f32) {
        self.angle = (self.angle + delta).clamp(-ANGLE_LIMIT, ANGLE_LIMIT);
    }
}
