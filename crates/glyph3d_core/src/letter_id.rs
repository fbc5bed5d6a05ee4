//! Letter/ID models
//!
//! A letter/ID model is a label (a list of glyphs, each a list of segment
//! matrices) placed somewhere in the scene and driven by one ObjectTransform.

use glyph3d_math::{Mat4, TransformList};

use crate::transform::ObjectTransform;

/// A group of glyphs moved, turned and scaled as one object
#[derive(Clone, Debug)]
pub struct LetterIdModel {
    /// Placed glyph matrices; never modified after construction
    original: Vec<Vec<Mat4>>,
    /// Matrices drawn this frame
    derived: Vec<Vec<Mat4>>,
    /// User-controlled transform
    pub transform: ObjectTransform,
}

impl LetterIdModel {
    /// Create a model from glyph matrices that are already placed
    pub fn new(glyphs: Vec<Vec<Mat4>>) -> Self {
        Self {
            derived: glyphs.clone(),
            original: glyphs,
            transform: ObjectTransform::identity(),
        }
    }

    /// Create a model by applying `placement` to `glyphs`
    pub fn placed(glyphs: &[Vec<Mat4>], placement: Mat4) -> Self {
        Self::new(glyphs.transformed(placement))
    }

    /// Builder: start from a given transform
    pub fn with_transform(mut self, transform: ObjectTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Rebuild the drawn matrices as `world * transform * original`
    ///
    /// Always starts from the original matrices, so calling this any number of
    /// times with the same inputs gives the same result.
    pub fn recompute(&mut self, world: Mat4) {
        self.derived = self.original.transformed(world * self.transform.matrix());
    }

    /// Glyph matrices as drawn this frame
    pub fn glyphs(&self) -> &[Vec<Mat4>] {
        &self.derived
    }

    /// Glyph matrices before the user transform
    pub fn original(&self) -> &[Vec<Mat4>] {
        &self.original
    }

    /// Number of glyphs
    pub fn glyph_count(&self) -> usize {
        self.original.len()
    }

    /// Total number of segment matrices
    pub fn matrix_count(&self) -> usize {
        self.original.iter().map(Vec::len).sum()
    }

    /// Iterate over every drawn segment matrix
    pub fn matrices(&self) -> impl Iterator<Item = &Mat4> {
        self.derived.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyph3d_math::{rotation_degrees, translation, Axis, Vec3};

    const EPSILON: f32 = 0.0001;

    fn sample_glyphs() -> Vec<Vec<Mat4>> {
        vec![
            vec![translation(Vec3::new(1.0, 0.0, 0.0)), translation(Vec3::new(1.0, 1.0, 0.0))],
            vec![translation(Vec3::new(2.0, 0.0, 0.0))],
        ]
    }

    fn all_close(a: &[Vec<Mat4>], b: &[Vec<Mat4>]) -> bool {
        a.len() == b.len()
            && a.iter().zip(b).all(|(x, y)| {
                x.len() == y.len() && x.iter().zip(y).all(|(m, n)| m.abs_diff_eq(*n, EPSILON))
            })
    }

    #[test]
    fn test_new_model_draws_original() {
        let model = LetterIdModel::new(sample_glyphs());
        assert_eq!(model.glyph_count(), 2);
        assert_eq!(model.matrix_count(), 3);
        assert!(all_close(model.glyphs(), &sample_glyphs()));
    }

    #[test]
    fn test_placed() {
        let model = LetterIdModel::placed(&sample_glyphs(), translation(Vec3::new(0.0, 0.0, -10.0)));
        let p = model.original()[1][0].transform_point3(Vec3::ZERO);
        assert!(p.abs_diff_eq(Vec3::new(2.0, 0.0, -10.0), EPSILON));
    }

    #[test]
    fn test_recompute_has_no_drift() {
        let mut model = LetterIdModel::new(sample_glyphs());
        model.transform.scale = 1.3;
        model.transform.angle = 17.0;
        model.transform.position = Vec3::new(0.5, 0.0, -0.25);
        let world = rotation_degrees(Axis::X, 10.0);

        model.recompute(world);
        let first = model.glyphs().to_vec();
        for _ in 0..100 {
            model.recompute(world);
        }
        assert!(all_close(model.glyphs(), &first));
    }

    #[test]
    fn test_recompute_applies_world_then_transform() {
        let mut model = LetterIdModel::new(sample_glyphs());
        model.transform.position = Vec3::new(0.0, 0.0, 1.0);
        // World turns +Z into +X
        model.recompute(rotation_degrees(Axis::Y, 90.0));

        // Original (2, 0, 0) + (0, 0, 1) = (2, 0, 1), then Ry(90) -> (1, 0, -2)
        let p = model.glyphs()[1][0].transform_point3(Vec3::ZERO);
        assert!(p.abs_diff_eq(Vec3::new(1.0, 0.0, -2.0), EPSILON), "got {:?}", p);
    }

    #[test]
    fn test_identity_recompute_restores_original() {
        let mut model = LetterIdModel::new(sample_glyphs());
        model.transform.scale = 3.0;
        model.recompute(Mat4::IDENTITY);
        model.transform = ObjectTransform::identity();
        model.recompute(Mat4::IDENTITY);
        assert!(all_close(model.glyphs(), model.original()));
    }

    #[test]
    fn test_matrices_iterator() {
        let model = LetterIdModel::new(sample_glyphs());
        assert_eq!(model.matrices().count(), 3);
    }
}
