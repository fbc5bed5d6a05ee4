//! Unit cube mesh
//!
//! A cube centred on the origin with side 1, drawn as 36 non-indexed
//! vertices. Every face winds counter-clockwise when seen from outside and
//! carries its own colour.

use crate::pipeline::Vertex;

pub const CUBE_VERTEX_COUNT: usize = 36;

pub const RED: [f32; 3] = [1.0, 0.0, 0.0];
pub const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
pub const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
pub const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
pub const MAGENTA: [f32; 3] = [1.0, 0.0, 1.0];
pub const CYAN: [f32; 3] = [0.0, 1.0, 1.0];

/// Face corners, counter-clockwise from outside, with the face colour
const FACES: [([[f32; 3]; 4], [f32; 3]); 6] = [
    // Left (-X)
    ([[-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5]], RED),
    // Back (-Z)
    ([[0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5]], BLUE),
    // Bottom (-Y)
    ([[-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5]], GREEN),
    // Front (+Z)
    ([[-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5]], YELLOW),
    // Right (+X)
    ([[0.5, -0.5, 0.5], [0.5, -0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5]], MAGENTA),
    // Top (+Y)
    ([[-0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, 0.5, -0.5], [-0.5, 0.5, -0.5]], CYAN),
];

/// Build the 36 cube vertices, two triangles per face
pub fn cube_vertices() -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(CUBE_VERTEX_COUNT);
    for (corners, color) in FACES {
        for index in [0, 1, 2, 0, 2, 3] {
            vertices.push(Vertex::new(corners[index], color));
        }
    }
    vertices
}
