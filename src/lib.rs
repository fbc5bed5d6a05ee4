//! Glyph3D - seven-segment letter/ID scene viewer
//!
//! Application-level modules shared by the binary and integration tests.

pub mod config;
pub mod input;
pub mod scene;
pub mod systems;
