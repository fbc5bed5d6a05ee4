//! Affine Mathematics Library
//!
//! This crate provides the small set of 3D transform helpers the Glyph3D scene
//! is built from. Vector and matrix types come from [`glam`]; this crate adds
//! degree-based constructors and bulk operations over lists of model matrices.
//!
//! ## Core Types
//!
//! - [`Mat4`] - column-major 4x4 matrix (re-exported from glam)
//! - [`Vec3`] - 3D vector (re-exported from glam)
//! - [`Axis`] - principal rotation axis
//!
//! ## Modules
//!
//! - [`matrix_list`] - translate/rotate/scale whole lists of matrices at once
//! - [`spherical`] - camera look direction from yaw/pitch angles

mod affine;
pub mod matrix_list;
pub mod spherical;

pub use glam::{Mat4, Vec3};

pub use affine::{rotation_degrees, scaling, translation, trs, uniform_scaling, Axis};
pub use matrix_list::{rotate_all, scale_all, translate_all, TransformList};
pub use spherical::{clamp_pitch, look_direction, wrap_yaw};
