//! Scene-wide rotation driven by the arrow keys

use glyph3d_math::{rotation_degrees, Axis, Mat4};

use crate::transform::ANGLE_LIMIT;

/// Rotation of the whole scene about the X and Y axes, in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldRotation {
    angle_x: f32,
    angle_y: f32,
}

impl WorldRotation {
    /// No rotation
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotation about X in degrees
    pub fn angle_x(&self) -> f32 {
        self.angle_x
    }

    /// Rotation about Y in degrees
    pub fn angle_y(&self) -> f32 {
        self.angle_y
    }

    /// Turn about X by `delta` degrees, clamped to +/-360
    pub fn rotate_x(&mut self, delta: f32) {
        self.angle_x = (self.angle_x + delta).clamp(-ANGLE_LIMIT, ANGLE_LIMIT);
    }

    /// Turn about Y by `delta` degrees, clamped to +/-360
    pub fn rotate_y(&mut self, delta: f32) {
        self.angle_y = (self.angle_y + delta).clamp(-ANGLE_LIMIT, ANGLE_LIMIT);
    }

    /// Back to no rotation
    pub fn reset(&mut self) {
        self.angle_x = 0.0;
        self.angle_y = 0.0;
    }

    /// `Rx(angle_x) * Ry(angle_y)`
    pub fn matrix(&self) -> Mat4 {
        rotation_degrees(Axis::X, self.angle_x) * rotation_degrees(Axis::Y, self.angle_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyph3d_math::Vec3;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_default_is_identity() {
        assert!(WorldRotation::new().matrix().abs_diff_eq(Mat4::IDENTITY, EPSILON));
    }

    #[test]
    fn test_clamped_increments() {
        let mut world = WorldRotation::new();
        for _ in 0..400 {
            world.rotate_x(1.0);
            world.rotate_y(-1.0);
        }
        assert_eq!(world.angle_x(), 360.0);
        assert_eq!(world.angle_y(), -360.0);
    }

    #[test]
    fn test_y_applied_before_x() {
        let mut world = WorldRotation::new();
        world.rotate_x(90.0);
        world.rotate_y(90.0);
        // +Z -> Ry(90) -> +X -> Rx(90) -> +X
        let p = world.matrix().transform_point3(Vec3::Z);
        assert!(p.abs_diff_eq(Vec3::X, EPSILON), "got {:?}", p);
    }

    #[test]
    fn test_reset() {
        let mut world = WorldRotation::new();
        world.rotate_x(12.0);
        world.rotate_y(-7.0);
        world.reset();
        assert_eq!(world, WorldRotation::new());
    }
}
