//! Scene construction utilities
//!
//! This module builds the letter/ID scene from configuration.

mod scene_builder;

pub use scene_builder::SceneBuilder;
