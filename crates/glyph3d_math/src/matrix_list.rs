//! Bulk transforms over lists of model matrices
//!
//! A glyph is a list of segment matrices, and a letter/ID model is a list of
//! glyphs. Both levels are moved around by left-multiplying every matrix by
//! the same transform.

use glam::{Mat4, Vec3};

use crate::affine::{rotation_degrees, scaling, translation, Axis};

/// A collection of model matrices that can be transformed as a whole
pub trait TransformList {
    /// Owned result of the transform
    type Output;

    /// Return a copy with `transform * m` applied to every matrix `m`
    fn transformed(&self, transform: Mat4) -> Self::Output;
}

impl TransformList for [Mat4] {
    type Output = Vec<Mat4>;

    fn transformed(&self, transform: Mat4) -> Vec<Mat4> {
        self.iter().map(|m| transform * *m).collect()
    }
}

impl TransformList for [Vec<Mat4>] {
    type Output = Vec<Vec<Mat4>>;

    fn transformed(&self, transform: Mat4) -> Vec<Vec<Mat4>> {
        self.iter().map(|list| list.transformed(transform)).collect()
    }
}

/// Translate every matrix by `offset`
pub fn translate_all<L: TransformList + ?Sized>(list: &L, offset: Vec3) -> L::Output {
    list.transformed(translation(offset))
}

/// Rotate every matrix about `axis` by `degrees` (around the origin)
pub fn rotate_all<L: TransformList + ?Sized>(list: &L, axis: Axis, degrees: f32) -> L::Output {
    list.transformed(rotation_degrees(axis, degrees))
}

/// Scale every matrix by `factors` (relative to the origin)
pub fn scale_all<L: TransformList + ?Sized>(list: &L, factors: Vec3) -> L::Output {
    list.transformed(scaling(factors))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn origin_of(m: &Mat4) -> Vec3 {
        m.transform_point3(Vec3::ZERO)
    }

    #[test]
    fn test_empty_list() {
        let list: Vec<Mat4> = Vec::new();
        assert!(list.transformed(translation(Vec3::X)).is_empty());
    }

    #[test]
    fn test_transform_is_left_multiplied() {
        let list = vec![scaling(Vec3::splat(2.0))];
        let result = list.transformed(translation(Vec3::new(5.0, 0.0, 0.0)));
        // Scale first, then translate: (1, 0, 0) -> (2, 0, 0) -> (7, 0, 0)
        let p = result[0].transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::new(7.0, 0.0, 0.0), EPSILON), "got {:?}", p);
    }

    #[test]
    fn test_translate_all_preserves_order() {
        let list = vec![
            translation(Vec3::new(1.0, 0.0, 0.0)),
            translation(Vec3::new(2.0, 0.0, 0.0)),
            translation(Vec3::new(3.0, 0.0, 0.0)),
        ];
        let moved = translate_all(list.as_slice(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(moved.len(), 3);
        for (i, m) in moved.iter().enumerate() {
            let expected = Vec3::new((i + 1) as f32, 1.0, 0.0);
            assert!(origin_of(m).abs_diff_eq(expected, EPSILON));
        }
    }

    #[test]
    fn test_rotate_all_nested() {
        let groups = vec![
            vec![translation(Vec3::X)],
            vec![translation(Vec3::X * 2.0), translation(Vec3::X * 3.0)],
        ];
        let rotated = rotate_all(groups.as_slice(), Axis::Y, -90.0);
        assert_eq!(rotated.len(), 2);
        assert_eq!(rotated[1].len(), 2);
        // Ry(-90) maps +X to +Z
        assert!(origin_of(&rotated[0][0]).abs_diff_eq(Vec3::Z, EPSILON));
        assert!(origin_of(&rotated[1][1]).abs_diff_eq(Vec3::Z * 3.0, EPSILON));
    }

    #[test]
    fn test_scale_all_about_origin() {
        let list = vec![translation(Vec3::new(1.0, 2.0, 3.0))];
        let scaled = scale_all(list.as_slice(), Vec3::splat(2.0));
        assert!(origin_of(&scaled[0]).abs_diff_eq(Vec3::new(2.0, 4.0, 6.0), EPSILON));
    }

    #[test]
    fn test_source_is_untouched() {
        let list = vec![Mat4::IDENTITY];
        let _ = translate_all(list.as_slice(), Vec3::ONE);
        assert_eq!(list[0], Mat4::IDENTITY);
    }
}
