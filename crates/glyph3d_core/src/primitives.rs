//! Grid lines and axis indicators
//!
//! Both are unit cubes stretched into thin bars.

use glyph3d_math::{rotation_degrees, scaling, translation, Axis, Mat4, Vec3};

/// Cross-section of a grid line
pub const GRID_LINE_THICKNESS: f32 = 0.01;

/// Cross-section of an axis indicator
pub const AXIS_THICKNESS: f32 = 0.05;

/// Grid of lines on the XZ plane
///
/// `size` lines span the grid in each direction (`size / 2` on each side of
/// the origin). Each line is `size * grid_unit` long.
pub fn grid_lines(size: usize, grid_unit: f32) -> Vec<Mat4> {
    let half = size / 2;
    let length = grid_unit * size as f32;
    let bar = scaling(Vec3::new(GRID_LINE_THICKNESS, GRID_LINE_THICKNESS, length));
    let turn = rotation_degrees(Axis::Y, 90.0);

    let mut lines = Vec::with_capacity(half * 4);
    for sign in [1.0f32, -1.0] {
        for i in 0..half {
            let offset = sign * i as f32 * grid_unit;
            // Runs along Z
            lines.push(translation(Vec3::new(offset, 0.0, 0.0)) * bar);
            // Runs along X
            lines.push(translation(Vec3::new(0.0, 0.0, offset)) * turn * bar);
        }
    }
    lines
}

/// X, Y and Z axis indicators
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axes {
    pub x: Mat4,
    pub y: Mat4,
    pub z: Mat4,
}

/// Axis indicators of the given length, starting at the origin
pub fn axes(length: f32) -> Axes {
    let bar = scaling(Vec3::new(AXIS_THICKNESS, length, AXIS_THICKNESS));
    let half = length / 2.0;

    Axes {
        x: translation(Vec3::new(half, 0.0, 0.0)) * rotation_degrees(Axis::Z, 90.0) * bar,
        y: translation(Vec3::new(0.0, half, 0.0)) * bar,
        z: translation(Vec3::new(0.0, 0.0, half)) * rotation_degrees(Axis::X, 90.0) * bar,
    }
}
