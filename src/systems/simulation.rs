//! Frame update system
//!
//! Manages the per-frame update including:
//! - Delta time calculation
//! - Held keys update the focused model and world rotation
//! - Mouse drags move the camera
//! - Recomputing every drawn matrix

use std::time::Instant;
use glyph3d_core::Scene;
use glyph3d_input::{CameraController, ObjectController};
use glyph3d_render::Camera;

/// Longest frame step fed to the camera, in seconds
const MAX_DT: f32 = 0.1;

/// Result of a frame update
pub struct SimulationResult {
    /// Seconds since the previous frame (capped)
    pub dt: f32,
    /// Whether the keyboard changed focus, a model or the world rotation
    pub scene_changed: bool,
}

/// Manages the per-frame update
pub struct SimulationSystem {
    last_frame: Instant,
}

impl SimulationSystem {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Run one frame
    pub fn update(
        &mut self,
        scene: &mut Scene,
        camera: &mut Camera,
        objects: &mut ObjectController,
        camera_controller: &mut CameraController,
    ) -> SimulationResult {
        let now = Instant::now();
        // Cap dt so a stalled frame (first frame, window drag) cannot fling the camera
        let dt = (now - self.last_frame).as_secs_f32().min(MAX_DT);
        self.last_frame = now;

        let result = step(scene, camera, objects, camera_controller, dt);
        log::trace!("Frame dt {:.4}s, scene changed: {}", dt, result.scene_changed);
        result
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply one frame of input with an explicit `dt`
fn step(
    scene: &mut Scene,
    camera: &mut Camera,
    objects: &mut ObjectController,
    camera_controller: &mut CameraController,
    dt: f32,
) -> SimulationResult {
    let scene_changed = objects.update(scene);
    camera_controller.update(camera, dt);

    // Derived matrices are always rebuilt from the originals
    scene.update();

    SimulationResult { dt, scene_changed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyph3d_core::{LetterIdModel, Mat4, Vec3};
    use winit::event::{ElementState, MouseButton};
    use winit::keyboard::KeyCode;

    fn one_model_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add_model(LetterIdModel::new(vec![vec![Mat4::IDENTITY]]));
        scene.update();
        scene
    }

    #[test]
    fn test_dt_capped() {
        let mut sim = SimulationSystem::new();
        std::thread::sleep(std::time::Duration::from_millis(150));

        let result = sim.update(
            &mut one_model_scene(),
            &mut Camera::new(),
            &mut ObjectController::new(),
            &mut CameraController::new(),
        );
        assert!(result.dt <= MAX_DT);
    }

    #[test]
    fn test_step_moves_model_and_refreshes_matrices() {
        let mut scene = one_model_scene();
        let mut objects = ObjectController::new();
        objects.process_keyboard(KeyCode::KeyD, ElementState::Pressed);

        let result = step(
            &mut scene,
            &mut Camera::new(),
            &mut objects,
            &mut CameraController::new(),
            0.016,
        );

        assert!(result.scene_changed);
        let p = scene.models()[0].glyphs()[0][0].transform_point3(Vec3::ZERO);
        assert!((p.x - 0.01).abs() < 0.0001, "got {:?}", p);
    }

    #[test]
    fn test_step_pans_camera() {
        let mut camera = Camera::new();
        let mut controller = CameraController::new();
        controller.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        controller.process_mouse_motion(-20.0, 0.0);

        let result = step(
            &mut one_model_scene(),
            &mut camera,
            &mut ObjectController::new(),
            &mut controller,
            0.1,
        );

        assert!(!result.scene_changed);
        assert!((camera.position.x - 1.1).abs() < 0.0001, "got {:?}", camera.position);
    }
}
