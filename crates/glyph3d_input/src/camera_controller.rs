//! Camera controller for mouse-driven viewing
//!
//! Controls:
//! - Right button + drag: Pan along X (horizontal drag) and Z (vertical drag)
//! - Left button + drag: Zoom by changing the field of view
//! - Middle button + drag: Tilt (yaw and pitch)
//! - Shift: Faster panning

use glyph3d_core::Vec3;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Camera controller for handling mouse input
pub struct CameraController {
    // Button state
    pan_active: bool,   // Right button
    zoom_active: bool,  // Left button
    tilt_active: bool,  // Middle button
    fast: bool,         // Shift

    // Mouse motion accumulated since the last update
    pending_dx: f32,
    pending_dy: f32,

    // Configuration
    pub pan_speed: f32,
    pub fast_pan_speed: f32,
    pub tilt_sensitivity: f32,
    pub zoom_step: f32,
    /// Mouse deltas within +/- this many pixels do not pan or zoom
    pub drag_threshold: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            pan_active: false,
            zoom_active: false,
            tilt_active: false,
            fast: false,

            pending_dx: 0.0,
            pending_dy: 0.0,

            pan_speed: 5.0,
            fast_pan_speed: 25.0,
            tilt_sensitivity: 40.0,
            zoom_step: 1.0,
            drag_threshold: 5.0,
        }
    }

    /// Process keyboard input
    ///
    /// Only Shift is consumed, and it is reported as not handled so other
    /// controllers still see it.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        if matches!(key, KeyCode::ShiftLeft | KeyCode::ShiftRight) {
            self.fast = state == ElementState::Pressed;
        }
        false
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match button {
            MouseButton::Right => self.pan_active = pressed,
            MouseButton::Left => self.zoom_active = pressed,
            MouseButton::Middle => self.tilt_active = pressed,
            _ => {}
        }
    }

    /// Process mouse movement
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        self.pending_dx += delta_x as f32;
        self.pending_dy += delta_y as f32;
    }

    /// Current pan speed in world units per second
    pub fn current_pan_speed(&self) -> f32 {
        if self.fast {
            self.fast_pan_speed
        } else {
            self.pan_speed
        }
    }

    /// Update the camera based on accumulated input
    ///
    /// Returns the camera position for debug display.
    pub fn update<C: CameraControl>(&mut self, camera: &mut C, dt: f32) -> Vec3 {
        let dx = self.pending_dx;
        let dy = self.pending_dy;
        let step = self.current_pan_speed() * dt;

        if self.pan_active {
            // Dragging left moves the camera toward +X, dragging up toward +Z
            let pan_x = threshold_sign(dx, self.drag_threshold) * -step;
            let pan_z = threshold_sign(dy, self.drag_threshold) * -step;
            if pan_x != 0.0 || pan_z != 0.0 {
                camera.pan(pan_x, pan_z);
            }
        }

        if self.zoom_active {
            let zoom = threshold_sign(dy, self.drag_threshold) * -self.zoom_step;
            if zoom != 0.0 {
                camera.zoom(zoom);
            }
        }

        if self.tilt_active && (dx != 0.0 || dy != 0.0) {
            camera.tilt(
                -dx * self.tilt_sensitivity * dt,
                -dy * self.tilt_sensitivity * dt,
            );
        }

        self.pending_dx = 0.0;
        self.pending_dy = 0.0;

        camera.position()
    }

    /// Check if any mouse button is held
    pub fn is_dragging(&self) -> bool {
        self.pan_active || self.zoom_active || self.tilt_active
    }

    /// Builder: set pan speed
    pub fn with_pan_speed(mut self, speed: f32) -> Self {
        self.pan_speed = speed;
        self
    }

    /// Builder: set pan speed while Shift is held
    pub fn with_fast_pan_speed(mut self, speed: f32) -> Self {
        self.fast_pan_speed = speed;
        self
    }

    /// Builder: set tilt sensitivity (degrees per pixel per second)
    pub fn with_tilt_sensitivity(mut self, sensitivity: f32) -> Self {
        self.tilt_sensitivity = sensitivity;
        self
    }

    /// Builder: set field of view change per zoom step (degrees)
    pub fn with_zoom_step(mut self, step: f32) -> Self {
        self.zoom_step = step;
        self
    }

    /// Builder: set drag threshold in pixels
    pub fn with_drag_threshold(mut self, threshold: f32) -> Self {
        self.drag_threshold = threshold;
        self
    }
}

/// -1 below -threshold, +1 above threshold, 0 in between
fn threshold_sign(delta: f32, threshold: f32) -> f32 {
    if delta < -threshold {
        -1.0
    } else if delta > threshold {
        1.0
    } else {
        0.0
    }
}

/// Trait for camera control
/// Allows the controller to work with different camera implementations
pub trait CameraControl {
    /// Move along world X and Z
    fn pan(&mut self, delta_x: f32, delta_z: f32);
    /// Change the field of view (degrees)
    fn zoom(&mut self, delta_fov: f32);
    /// Change yaw and pitch (degrees)
    fn tilt(&mut self, delta_yaw: f32, delta_pitch: f32);
    fn position(&self) -> Vec3;
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    #[derive(Default)]
    struct MockCamera {
        position: Vec3,
        fov: f32,
        yaw: f32,
        pitch: f32,
        pan_calls: usize,
    }

    impl CameraControl for MockCamera {
        fn pan(&mut self, delta_x: f32, delta_z: f32) {
            self.position += Vec3::new(delta_x, 0.0, delta_z);
            self.pan_calls += 1;
        }
        fn zoom(&mut self, delta_fov: f32) {
            self.fov += delta_fov;
        }
        fn tilt(&mut self, delta_yaw: f32, delta_pitch: f32) {
            self.yaw += delta_yaw;
            self.pitch += delta_pitch;
        }
        fn position(&self) -> Vec3 {
            self.position
        }
    }

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_motion_without_button_does_nothing() {
        let mut controller = CameraController::new();
        let mut camera = MockCamera::default();

        controller.process_mouse_motion(-20.0, 20.0);
        controller.update(&mut camera, 0.1);

        assert_eq!(camera.position, Vec3::ZERO);
        assert_eq!(camera.fov, 0.0);
        assert_eq!(camera.yaw, 0.0);
    }

    #[test]
    fn test_pan_directions() {
        let mut controller = CameraController::new();
        let mut camera = MockCamera::default();

        controller.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        controller.process_mouse_motion(-10.0, 10.0);
        let position = controller.update(&mut camera, 0.1);

        // Drag left: +X, drag down: -Z, at 5 units/sec
        assert!(approx_eq(position.x, 0.5), "got {:?}", position);
        assert!(approx_eq(position.z, -0.5), "got {:?}", position);
    }

    #[test]
    fn test_pan_ignores_small_deltas() {
        let mut controller = CameraController::new();
        let mut camera = MockCamera::default();

        controller.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        controller.process_mouse_motion(5.0, -4.0);
        controller.update(&mut camera, 0.1);

        assert_eq!(camera.pan_calls, 0);
    }

    #[test]
    fn test_shift_speeds_up_pan() {
        let mut controller = CameraController::new();
        let mut camera = MockCamera::default();

        controller.process_keyboard(KeyCode::ShiftLeft, ElementState::Pressed);
        assert_eq!(controller.current_pan_speed(), 25.0);

        controller.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        controller.process_mouse_motion(10.0, 0.0);
        controller.update(&mut camera, 0.1);
        assert!(approx_eq(camera.position.x, -2.5));

        controller.process_keyboard(KeyCode::ShiftLeft, ElementState::Released);
        assert_eq!(controller.current_pan_speed(), 5.0);
    }

    #[test]
    fn test_zoom_steps() {
        let mut controller = CameraController::new();
        let mut camera = MockCamera::default();

        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        controller.process_mouse_motion(0.0, -8.0);
        controller.update(&mut camera, 0.016);
        assert_eq!(camera.fov, 1.0);

        controller.process_mouse_motion(0.0, 8.0);
        controller.update(&mut camera, 0.016);
        controller.process_mouse_motion(0.0, 8.0);
        controller.update(&mut camera, 0.016);
        assert_eq!(camera.fov, -1.0);

        controller.process_mouse_motion(0.0, 3.0);
        controller.update(&mut camera, 0.016);
        assert_eq!(camera.fov, -1.0);
    }

    #[test]
    fn test_tilt_scales_with_dt() {
        let mut controller = CameraController::new();
        let mut camera = MockCamera::default();

        controller.process_mouse_button(MouseButton::Middle, ElementState::Pressed);
        controller.process_mouse_motion(2.0, -1.0);
        controller.update(&mut camera, 0.5);

        assert!(approx_eq(camera.yaw, -40.0));
        assert!(approx_eq(camera.pitch, 20.0));
    }

    #[test]
    fn test_motion_accumulates_until_update() {
        let mut controller = CameraController::new();
        let mut camera = MockCamera::default();

        controller.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        controller.process_mouse_motion(-3.0, 0.0);
        controller.process_mouse_motion(-3.0, 0.0);
        controller.update(&mut camera, 1.0);
        assert!(approx_eq(camera.position.x, 5.0));

        // Pending motion was cleared
        controller.update(&mut camera, 1.0);
        assert_eq!(camera.pan_calls, 1);
    }

    #[test]
    fn test_release_stops_drag() {
        let mut controller = CameraController::new();
        controller.process_mouse_button(MouseButton::Middle, ElementState::Pressed);
        assert!(controller.is_dragging());
        controller.process_mouse_button(MouseButton::Middle, ElementState::Released);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_builders() {
        let controller = CameraController::new()
            .with_pan_speed(1.0)
            .with_fast_pan_speed(2.0)
            .with_tilt_sensitivity(3.0)
            .with_zoom_step(4.0)
            .with_drag_threshold(6.0);
        assert_eq!(controller.pan_speed, 1.0);
        assert_eq!(controller.fast_pan_speed, 2.0);
        assert_eq!(controller.tilt_sensitivity, 3.0);
        assert_eq!(controller.zoom_step, 4.0);
        assert_eq!(controller.drag_threshold, 6.0);
    }
}
