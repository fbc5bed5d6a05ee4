//! Integration tests for the full letter/ID scene
//!
//! Builds the five-model ring scene through the public API and checks the
//! behaviour the frame loop relies on.

use glyph3d_core::{
    axes, build_label, grid_lines, Coloring, LetterIdModel, Mat4, RingLayout, RingPlacement,
    Scene, SegmentGeometry, Vec3,
};

const EPSILON: f32 = 0.0001;

fn ring_scene() -> Scene {
    let geometry = SegmentGeometry::default();
    let layout = RingLayout::default();
    let glyphs = build_label("PE 28", &geometry).expect("label should build");

    let mut scene = Scene::new()
        .with_grid(grid_lines(128, geometry.grid_unit))
        .with_axes(axes(geometry.grid_unit * 7.0));

    for placement in RingPlacement::ALL {
        scene.add_model(LetterIdModel::placed(&glyphs, placement.matrix(&layout)));
    }
    scene.update();
    scene
}

#[test]
fn test_ring_scene_contents() {
    let scene = ring_scene();
    assert_eq!(scene.model_count(), 5);
    assert_eq!(scene.grid().len(), 256);

    // 5 + 5 + 5 + 7 segments per label
    for model in scene.models() {
        assert_eq!(model.glyph_count(), 4);
        assert_eq!(model.matrix_count(), 22);
    }

    // 256 grid lines + 3 axes + 5 * 22 segments
    assert_eq!(scene.cube_count(), 256 + 3 + 110);
}

#[test]
fn test_only_focused_model_moves() {
    let mut scene = ring_scene();
    let before: Vec<Mat4> = scene.models()[0].matrices().copied().collect();

    scene.focus(2);
    let model = scene.focused_mut().unwrap();
    model.transform.translate(Vec3::new(0.5, 0.0, 0.0));
    model.transform.rotate(15.0);
    scene.update();

    let after: Vec<Mat4> = scene.models()[0].matrices().copied().collect();
    for (a, b) in before.iter().zip(&after) {
        assert!(a.abs_diff_eq(*b, EPSILON), "unfocused model changed");
    }

    let moved = &scene.models()[2];
    let unmoved_first = moved.original()[0][0];
    assert!(!moved.glyphs()[0][0].abs_diff_eq(unmoved_first, EPSILON));
}

#[test]
fn test_world_rotation_round_trip() {
    let mut scene = ring_scene();
    let before: Vec<Mat4> = scene.grid().to_vec();

    for _ in 0..45 {
        scene.world_mut().rotate_x(1.0);
        scene.world_mut().rotate_y(-1.0);
    }
    scene.update();
    assert!(!scene.grid()[1].abs_diff_eq(before[1], EPSILON));

    scene.world_mut().reset();
    scene.update();
    for (a, b) in scene.grid().iter().zip(&before) {
        assert!(a.abs_diff_eq(*b, EPSILON));
    }
}

#[test]
fn test_models_drawn_with_face_colors() {
    let scene = ring_scene();
    let face_colored = scene
        .draw_batches()
        .iter()
        .filter(|b| b.coloring == Coloring::FaceColors)
        .count();
    // One batch per glyph
    assert_eq!(face_colored, 5 * 4);
}
