//! Ring placements
//!
//! Five copies of the label are arranged like hands on a clock face: four on
//! a ring around the origin, each turned to face the centre, plus one at the
//! origin itself.

use glyph3d_math::{rotation_degrees, translation, Axis, Mat4, Vec3};

/// Position of a letter/ID model on the ring
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RingPlacement {
    /// On -Z, reading along +X
    Twelve,
    /// On +Z, turned half a revolution
    Six,
    /// On +X, turned a quarter revolution clockwise
    Three,
    /// On -X, turned a quarter revolution counter-clockwise
    Nine,
    /// At the origin
    Center,
}

impl RingPlacement {
    /// All placements in selection order (keys 1-5)
    pub const ALL: [RingPlacement; 5] = [
        RingPlacement::Twelve,
        RingPlacement::Six,
        RingPlacement::Three,
        RingPlacement::Nine,
        RingPlacement::Center,
    ];

    /// Placement matrix applied to the label's glyphs
    pub fn matrix(self, layout: &RingLayout) -> Mat4 {
        let u = layout.grid_unit;
        let r = layout.distance;
        let o = layout.offset;

        match self {
            RingPlacement::Twelve => translation(Vec3::new(0.0, 0.0, -r * u)),
            RingPlacement::Six => {
                translation(Vec3::new(o * u, 0.0, r * u)) * rotation_degrees(Axis::Y, -180.0)
            }
            RingPlacement::Three => {
                translation(Vec3::new(r * u, 0.0, -o * u)) * rotation_degrees(Axis::Y, -90.0)
            }
            RingPlacement::Nine => {
                translation(Vec3::new(-r * u, 0.0, o * u)) * rotation_degrees(Axis::Y, 90.0)
            }
            RingPlacement::Center => Mat4::IDENTITY,
        }
    }

    /// Short human-readable name
    pub fn name(self) -> &'static str {
        match self {
            RingPlacement::Twelve => "12 o'clock",
            RingPlacement::Six => "6 o'clock",
            RingPlacement::Three => "3 o'clock",
            RingPlacement::Nine => "9 o'clock",
            RingPlacement::Center => "center",
        }
    }
}

/// Ring dimensions, in grid units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingLayout {
    /// World units per grid unit
    pub grid_unit: f32,
    /// Distance from the origin to each ring model
    pub distance: f32,
    /// Sideways shift that re-centres the turned models
    pub offset: f32,
}

impl Default for RingLayout {
    fn default() -> Self {
        Self {
            grid_unit: 0.2,
            distance: 50.0,
            offset: 15.0,
        }
    }
}
