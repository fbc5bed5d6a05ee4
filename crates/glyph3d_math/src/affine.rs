//! Degree-based affine matrix constructors
//!
//! Every model matrix in the scene is composed as `T * R * S`: scale first,
//! then rotate, then translate.

use glam::{Mat4, Vec3};

/// One of the three principal axes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along this axis
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// Translation matrix
#[inline]
pub fn translation(offset: Vec3) -> Mat4 {
    Mat4::from_translation(offset)
}

/// Rotation matrix about `axis` by `degrees` (counter-clockwise, right-handed)
#[inline]
pub fn rotation_degrees(axis: Axis, degrees: f32) -> Mat4 {
    Mat4::from_axis_angle(axis.unit(), degrees.to_radians())
}

/// Non-uniform scale matrix
#[inline]
pub fn scaling(factors: Vec3) -> Mat4 {
    Mat4::from_scale(factors)
}

/// Uniform scale matrix
#[inline]
pub fn uniform_scaling(factor: f32) -> Mat4 {
    Mat4::from_scale(Vec3::splat(factor))
}

/// Compose `T(offset) * R(axis, degrees) * S(factors)`
///
/// Applied to a point this scales, then rotates, then translates.
pub fn trs(offset: Vec3, axis: Axis, degrees: f32, factors: Vec3) -> Mat4 {
    translation(offset) * rotation_degrees(axis, degrees) * scaling(factors)
}
