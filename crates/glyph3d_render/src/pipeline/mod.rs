//! Rendering pipeline components
//!
//! GPU data layouts and the instanced cube pipeline.

pub mod cube_pipeline;
pub mod types;

pub use cube_pipeline::CubePipeline;
pub use types::{collect_instances, CameraUniforms, CubeInstance, RenderMode, Vertex};
