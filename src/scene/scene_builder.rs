//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for assembling the grid, the axis indicators and
//! the letter/ID models into a [`Scene`].

use glyph3d_core::{
    axes, build_label, grid_lines, GlyphError, LetterIdModel, Mat4, RingLayout, RingPlacement,
    Scene, SceneColors, SegmentGeometry,
};

use crate::config::{RenderingConfig, SceneConfig};

/// Builder for the letter/ID scene
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new()
///     .with_grid(128)
///     .with_axes(7.0)
///     .add_ring("PE 28", &RingLayout::default())?
///     .build();
/// ```
pub struct SceneBuilder {
    scene: Scene,
    geometry: SegmentGeometry,
}

impl SceneBuilder {
    /// Create a new scene builder with the default segment geometry
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            geometry: SegmentGeometry::default(),
        }
    }

    /// Build the scene described by the config
    pub fn from_config(scene: &SceneConfig, rendering: &RenderingConfig) -> Result<Scene, GlyphError> {
        let layout = RingLayout {
            grid_unit: scene.grid_unit,
            distance: scene.ring_distance,
            offset: scene.ring_offset,
        };
        let colors = SceneColors {
            grid: rendering.grid_color,
            x_axis: rendering.x_axis_color,
            y_axis: rendering.y_axis_color,
            z_axis: rendering.z_axis_color,
        };

        let built = Self::new()
            .with_grid_unit(scene.grid_unit)
            .with_colors(colors)
            .with_grid(scene.grid_size as usize)
            .with_axes(scene.axis_length_units)
            .add_ring(&scene.label, &layout)?
            .build();

        log::info!(
            "Built scene: {} models showing '{}', {} cubes",
            built.model_count(),
            scene.label,
            built.cube_count()
        );
        Ok(built)
    }

    /// Set the grid spacing used by the grid, axes and glyphs
    pub fn with_grid_unit(mut self, grid_unit: f32) -> Self {
        self.geometry.grid_unit = grid_unit;
        self
    }

    /// Set the grid and axis colours
    pub fn with_colors(mut self, colors: SceneColors) -> Self {
        self.scene = self.scene.with_colors(colors);
        self
    }

    /// Add a square grid of `size` cells per side on the XZ plane
    pub fn with_grid(mut self, size: usize) -> Self {
        self.scene = self.scene.with_grid(grid_lines(size, self.geometry.grid_unit));
        self
    }

    /// Add axis indicators `length_units` grid units long
    pub fn with_axes(mut self, length_units: f32) -> Self {
        self.scene = self.scene.with_axes(axes(length_units * self.geometry.grid_unit));
        self
    }

    /// Add one letter/ID model showing `label` at `placement`
    pub fn add_label(mut self, label: &str, placement: Mat4) -> Result<Self, GlyphError> {
        let glyphs = build_label(label, &self.geometry)?;
        self.scene.add_model(LetterIdModel::placed(&glyphs, placement));
        Ok(self)
    }

    /// Add the five ring models showing `label`, in selection order
    pub fn add_ring(mut self, label: &str, layout: &RingLayout) -> Result<Self, GlyphError> {
        let glyphs = build_label(label, &self.geometry)?;
        for placement in RingPlacement::ALL {
            log::debug!("Placing '{}' at {}", label, placement.name());
            self.scene.add_model(LetterIdModel::placed(&glyphs, placement.matrix(layout)));
        }
        Ok(self)
    }

    /// Build the scene with all derived matrices computed
    pub fn build(mut self) -> Scene {
        self.scene.update();
        self.scene
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}
