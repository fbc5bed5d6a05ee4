//! Scene - everything drawn in one frame
//!
//! The scene owns the grid, the axis indicators and the letter/ID models,
//! along with the two pieces of user state that affect all of them: which
//! model has focus and how the world is rotated.

use glyph3d_math::{Mat4, TransformList};

use crate::letter_id::LetterIdModel;
use crate::primitives::Axes;
use crate::world_rotation::WorldRotation;

/// How the cubes of a batch are coloured
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Coloring {
    /// Every face the same RGB colour
    Solid([f32; 3]),
    /// Each cube face its own colour
    FaceColors,
}

/// A set of cube matrices drawn with the same colouring
#[derive(Clone, Copy, Debug)]
pub struct DrawBatch<'a> {
    pub coloring: Coloring,
    pub matrices: &'a [Mat4],
}

/// Colours of the scene's fixed elements
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneColors {
    pub grid: [f32; 3],
    pub x_axis: [f32; 3],
    pub y_axis: [f32; 3],
    pub z_axis: [f32; 3],
}

impl Default for SceneColors {
    fn default() -> Self {
        Self {
            grid: [1.0, 1.0, 1.0],
            x_axis: [1.0, 0.0, 0.0],
            y_axis: [0.0, 1.0, 0.0],
            z_axis: [0.0, 0.0, 1.0],
        }
    }
}

/// The complete scene
pub struct Scene {
    base_grid: Vec<Mat4>,
    grid: Vec<Mat4>,
    base_axes: Option<Axes>,
    /// Drawn axis matrices in Y, X, Z order
    axes: [Mat4; 3],
    models: Vec<LetterIdModel>,
    focus: usize,
    world: WorldRotation,
    colors: SceneColors,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self {
            base_grid: Vec::new(),
            grid: Vec::new(),
            base_axes: None,
            axes: [Mat4::IDENTITY; 3],
            models: Vec::new(),
            focus: 0,
            world: WorldRotation::new(),
            colors: SceneColors::default(),
        }
    }

    /// Builder: set the grid line matrices
    pub fn with_grid(mut self, lines: Vec<Mat4>) -> Self {
        self.grid = lines.clone();
        self.base_grid = lines;
        self
    }

    /// Builder: set the axis indicators
    pub fn with_axes(mut self, axes: Axes) -> Self {
        self.axes = [axes.y, axes.x, axes.z];
        self.base_axes = Some(axes);
        self
    }

    /// Builder: set the grid and axis colours
    pub fn with_colors(mut self, colors: SceneColors) -> Self {
        self.colors = colors;
        self
    }

    /// Add a letter/ID model, returning its index
    pub fn add_model(&mut self, model: LetterIdModel) -> usize {
        self.models.push(model);
        self.models.len() - 1
    }

    /// All letter/ID models in selection order
    pub fn models(&self) -> &[LetterIdModel] {
        &self.models
    }

    /// Number of letter/ID models
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Give focus to model `index`
    ///
    /// Returns false (and keeps the current focus) if there is no such model.
    pub fn focus(&mut self, index: usize) -> bool {
        if index < self.models.len() {
            if self.focus != index {
                log::debug!("Focus moved to model {}", index + 1);
            }
            self.focus = index;
            true
        } else {
            false
        }
    }

    /// Index of the focused model
    pub fn focus_index(&self) -> usize {
        self.focus
    }

    /// The focused model (None if the scene has no models)
    pub fn focused(&self) -> Option<&LetterIdModel> {
        self.models.get(self.focus)
    }

    /// Mutable access to the focused model
    pub fn focused_mut(&mut self) -> Option<&mut LetterIdModel> {
        self.models.get_mut(self.focus)
    }

    /// Current world rotation
    pub fn world(&self) -> &WorldRotation {
        &self.world
    }

    /// Mutable world rotation
    pub fn world_mut(&mut self) -> &mut WorldRotation {
        &mut self.world
    }

    /// Colours of the fixed elements
    pub fn colors(&self) -> &SceneColors {
        &self.colors
    }

    /// Recompute every drawn matrix from the base matrices and current state
    pub fn update(&mut self) {
        let world = self.world.matrix();

        self.grid = self.base_grid.transformed(world);
        if let Some(axes) = &self.base_axes {
            self.axes = [world * axes.y, world * axes.x, world * axes.z];
        }
        for model in &mut self.models {
            model.recompute(world);
        }
    }

    /// Drawn grid line matrices
    pub fn grid(&self) -> &[Mat4] {
        &self.grid
    }

    /// Everything to draw this frame, grouped by colouring
    pub fn draw_batches(&self) -> Vec<DrawBatch<'_>> {
        let mut batches = Vec::with_capacity(4 + self.models.len() * 4);

        if !self.grid.is_empty() {
            batches.push(DrawBatch {
                coloring: Coloring::Solid(self.colors.grid),
                matrices: &self.grid,
            });
        }

        if self.base_axes.is_some() {
            let colors = [self.colors.y_axis, self.colors.x_axis, self.colors.z_axis];
            for (matrix, color) in self.axes.iter().zip(colors) {
                batches.push(DrawBatch {
                    coloring: Coloring::Solid(color),
                    matrices: std::slice::from_ref(matrix),
                });
            }
        }

        for model in &self.models {
            for glyph in model.glyphs() {
                batches.push(DrawBatch {
                    coloring: Coloring::FaceColors,
                    matrices: glyph,
                });
            }
        }

        batches
    }

    /// Total number of cubes drawn this frame
    pub fn cube_count(&self) -> usize {
        self.draw_batches().iter().map(|b| b.matrices.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{axes, grid_lines};
    use glyph3d_math::{translation, Vec3};

    const EPSILON: f32 = 0.0001;

    fn model_at(x: f32) -> LetterIdModel {
        LetterIdModel::new(vec![vec![translation(Vec3::new(x, 0.0, 0.0))]])
    }

    fn sample_scene() -> Scene {
        let mut scene = Scene::new()
            .with_grid(grid_lines(4, 1.0))
            .with_axes(axes(1.4));
        scene.add_model(model_at(1.0));
        scene.add_model(model_at(2.0));
        scene
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new();
        assert_eq!(scene.model_count(), 0);
        assert!(scene.focused().is_none());
        assert!(scene.draw_batches().is_empty());
    }

    #[test]
    fn test_focus_out_of_range_is_ignored() {
        let mut scene = sample_scene();
        assert!(scene.focus(1));
        assert_eq!(scene.focus_index(), 1);
        assert!(!scene.focus(4));
        assert_eq!(scene.focus_index(), 1);
    }

    #[test]
    fn test_focused_mut_edits_one_model() {
        let mut scene = sample_scene();
        scene.focus(1);
        scene.focused_mut().unwrap().transform.scale = 2.0;
        assert_eq!(scene.models()[0].transform.scale, 1.0);
        assert_eq!(scene.models()[1].transform.scale, 2.0);
    }

    #[test]
    fn test_draw_batches_layout() {
        let scene = sample_scene();
        let batches = scene.draw_batches();
        // grid + 3 axes + 2 single-glyph models
        assert_eq!(batches.len(), 6);
        assert_eq!(batches[0].coloring, Coloring::Solid([1.0, 1.0, 1.0]));
        assert_eq!(batches[0].matrices.len(), 8);
        assert_eq!(batches[1].coloring, Coloring::Solid([0.0, 1.0, 0.0]));
        assert_eq!(batches[2].coloring, Coloring::Solid([1.0, 0.0, 0.0]));
        assert_eq!(batches[3].coloring, Coloring::Solid([0.0, 0.0, 1.0]));
        assert_eq!(batches[4].coloring, Coloring::FaceColors);
        assert_eq!(scene.cube_count(), 8 + 3 + 2);
    }

    #[test]
    fn test_update_applies_world_rotation_everywhere() {
        let mut scene = sample_scene();
        scene.world_mut().rotate_y(90.0);
        scene.update();

        // Model at +X ends up at -Z after Ry(90)
        let p = scene.models()[0].glyphs()[0][0].transform_point3(Vec3::ZERO);
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), EPSILON), "got {:?}", p);

        // Y axis is unaffected by a Y rotation
        let y_axis = scene.draw_batches()[1].matrices[0];
        let top = y_axis.transform_point3(Vec3::new(0.0, 0.5, 0.0));
        assert!(top.abs_diff_eq(Vec3::new(0.0, 1.4, 0.0), EPSILON));
    }

    #[test]
    fn test_reset_world_restores_base() {
        let mut scene = sample_scene();
        scene.world_mut().rotate_x(33.0);
        scene.update();
        scene.world_mut().reset();
        scene.update();

        let base = grid_lines(4, 1.0);
        for (a, b) in scene.grid().iter().zip(&base) {
            assert!(a.abs_diff_eq(*b, EPSILON));
        }
    }
}
