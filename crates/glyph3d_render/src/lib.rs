//! Cube Rendering Library
//!
//! This crate draws the scene as instanced unit cubes with wgpu.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::Camera`] - Spherical (yaw/pitch) perspective camera
//! - [`cube`] - The unit cube mesh every scene element is drawn from
//! - [`pipeline::CubePipeline`] - Instanced cube rendering in fill, line or point mode

pub mod camera;
pub mod context;
pub mod cube;
pub mod pipeline;

pub use camera::Camera;
pub use context::{ContextError, RenderContext};
pub use pipeline::{collect_instances, CameraUniforms, CubeInstance, CubePipeline, RenderMode, Vertex};
