//! Core types for the Glyph3D scene
//!
//! This crate provides the scene model that the renderer draws every frame:
//!
//! - [`Segments`] - which of the seven segments of a glyph are lit
//! - [`seven_segment_model`] - one cuboid matrix per lit segment
//! - [`build_label`] - lay out a string of glyphs along +X
//! - [`ObjectTransform`] - scale, position and yaw angle of one model
//! - [`WorldRotation`] - user-driven rotation applied to the whole scene
//! - [`LetterIdModel`] - a group of glyphs driven by one transform
//! - [`RingPlacement`] - where each letter/ID model sits around the origin
//! - [`Scene`] - grid, axes, models, focus and world rotation

mod transform;
mod world_rotation;
mod segment;
mod label;
mod letter_id;
mod placement;
mod primitives;
mod scene;

pub use transform::{ObjectTransform, ANGLE_LIMIT, MIN_SCALE};
pub use world_rotation::WorldRotation;
pub use segment::{seven_segment_model, segment_matrix, SegmentGeometry, Segments, SEGMENT_ORDER};
pub use label::{build_label, GlyphError, GLYPH_ADVANCE, LABEL_START, SPACE_ADVANCE};
pub use letter_id::LetterIdModel;
pub use placement::{RingLayout, RingPlacement};
pub use primitives::{axes, grid_lines, Axes, AXIS_THICKNESS, GRID_LINE_THICKNESS};
pub use scene::{Coloring, DrawBatch, Scene, SceneColors};

// Re-export commonly used math types for convenience
pub use glyph3d_math::{Axis, Mat4, Vec3};
