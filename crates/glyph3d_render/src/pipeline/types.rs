//! GPU-compatible data types for the cube pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use glyph3d_core::{Coloring, DrawBatch, Mat4};

/// A cube mesh vertex with its face colour
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

/// Per-cube instance data
/// Layout: 96 bytes (must match cube.wgsl InstanceInput)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CubeInstance {
    /// World matrix, column-major (64 bytes)
    pub model: [[f32; 4]; 4],
    /// Solid colour, RGBA (16 bytes)
    pub color: [f32; 4],
    /// 0 = solid colour, 1 = per-face vertex colour
    pub vertex_color_mix: f32,
    pub _padding: [f32; 3],
}

impl CubeInstance {
    /// Instance for one cube matrix with the given colouring
    pub fn new(model: &Mat4, coloring: Coloring) -> Self {
        let (color, vertex_color_mix) = match coloring {
            Coloring::Solid([r, g, b]) => ([r, g, b, 1.0], 0.0),
            Coloring::FaceColors => ([1.0; 4], 1.0),
        };
        Self {
            model: model.to_cols_array_2d(),
            color,
            vertex_color_mix,
            _padding: [0.0; 3],
        }
    }
}

/// Flatten draw batches into one instance per cube, preserving order
pub fn collect_instances(batches: &[DrawBatch<'_>]) -> Vec<CubeInstance> {
    let total = batches.iter().map(|b| b.matrices.len()).sum();
    let mut instances = Vec::with_capacity(total);
    for batch in batches {
        instances.extend(batch.matrices.iter().map(|m| CubeInstance::new(m, batch.coloring)));
    }
    instances
}

/// Camera uniforms
/// Layout: 128 bytes (must match cube.wgsl CameraUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CameraUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }
}

/// How cube triangles are rasterised
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderMode {
    #[default]
    Fill,
    Line,
    Point,
}

impl RenderMode {
    pub const ALL: [RenderMode; 3] = [RenderMode::Fill, RenderMode::Line, RenderMode::Point];

    pub fn to_wgpu(self) -> wgpu::PolygonMode {
        match self {
            RenderMode::Fill => wgpu::PolygonMode::Fill,
            RenderMode::Line => wgpu::PolygonMode::Line,
            RenderMode::Point => wgpu::PolygonMode::Point,
        }
    }

    /// Device feature this mode needs, if any
    pub fn required_feature(self) -> Option<wgpu::Features> {
        match self {
            RenderMode::Fill => None,
            RenderMode::Line => Some(wgpu::Features::POLYGON_MODE_LINE),
            RenderMode::Point => Some(wgpu::Features::POLYGON_MODE_POINT),
        }
    }

    /// Whether a device with `features` can draw in this mode
    pub fn is_supported(self, features: wgpu::Features) -> bool {
        self.required_feature().map_or(true, |f| features.contains(f))
    }

    pub fn name(self) -> &'static str {
        match self {
            RenderMode::Fill => "fill",
            RenderMode::Line => "line",
            RenderMode::Point => "point",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyph3d_core::Vec3;
    use std::mem::size_of;

    #[test]
    fn test_vertex_size() {
        // 3 floats position + 3 floats color = 24 bytes
        assert_eq!(size_of::<Vertex>(), 24);
    }

    #[test]
    fn test_cube_instance_size() {
        // 16 floats model + 4 floats color + 1 mix + 3 padding = 96 bytes
        assert_eq!(size_of::<CubeInstance>(), 96);
    }

    #[test]
    fn test_camera_uniforms_size() {
        assert_eq!(size_of::<CameraUniforms>(), 128);
    }

    #[test]
    fn test_instance_coloring() {
        let solid = CubeInstance::new(&Mat4::IDENTITY, Coloring::Solid([0.0, 1.0, 0.0]));
        assert_eq!(solid.color, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(solid.vertex_color_mix, 0.0);

        let faces = CubeInstance::new(&Mat4::IDENTITY, Coloring::FaceColors);
        assert_eq!(faces.vertex_color_mix, 1.0);
    }

    #[test]
    fn test_instance_matrix_is_column_major() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let instance = CubeInstance::new(&m, Coloring::FaceColors);
        assert_eq!(instance.model[3], [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_collect_instances_preserves_order() {
        let grid = [Mat4::IDENTITY, Mat4::IDENTITY];
        let glyph = [Mat4::from_translation(Vec3::X)];
        let batches = [
            DrawBatch { coloring: Coloring::Solid([1.0, 1.0, 1.0]), matrices: &grid },
            DrawBatch { coloring: Coloring::FaceColors, matrices: &glyph },
        ];
        let instances = collect_instances(&batches);
        assert_eq!(instances.len(), 3);
        assert_eq!(instances[1].vertex_color_mix, 0.0);
        assert_eq!(instances[2].vertex_color_mix, 1.0);
        assert_eq!(instances[2].model[3][0], 1.0);
    }

    #[test]
    fn test_render_mode_features() {
        assert!(RenderMode::Fill.is_supported(wgpu::Features::empty()));
        assert!(!RenderMode::Line.is_supported(wgpu::Features::empty()));
        assert!(RenderMode::Point.is_supported(wgpu::Features::POLYGON_MODE_POINT));
        assert_eq!(RenderMode::Line.to_wgpu(), wgpu::PolygonMode::Line);
    }
}
