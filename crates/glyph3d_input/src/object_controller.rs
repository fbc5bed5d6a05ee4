//! Object controller for letter/ID model manipulation
//!
//! Controls:
//! - 1-5: Select model
//! - U/J: Scale up/down
//! - A/D: Move along -X/+X
//! - W/S: Move along -Z/+Z
//! - Q/E: Turn counter-clockwise/clockwise about Y
//! - Left/Right: Rotate the world about X
//! - Down/Up: Rotate the world about Y
//! - Home: Reset world rotation

use glyph3d_core::{Scene, Vec3};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Keyboard controller for the focused model and the world rotation
pub struct ObjectController {
    // Selection requested since the last update
    pending_focus: Option<usize>,

    // Focused model
    scale_up: bool,
    scale_down: bool,
    move_left: bool,
    move_right: bool,
    move_forward: bool,
    move_backward: bool,
    turn_ccw: bool,  // Q
    turn_cw: bool,   // E

    // World rotation
    world_x_pos: bool,  // Left arrow
    world_x_neg: bool,  // Right arrow
    world_y_pos: bool,  // Down arrow
    world_y_neg: bool,  // Up arrow
    reset_world: bool,

    // Per-frame step sizes
    pub scale_step: f32,
    pub move_step: f32,
    pub rotate_step: f32,
    pub world_rotate_step: f32,
}

impl Default for ObjectController {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectController {
    pub fn new() -> Self {
        Self {
            pending_focus: None,

            scale_up: false,
            scale_down: false,
            move_left: false,
            move_right: false,
            move_forward: false,
            move_backward: false,
            turn_ccw: false,
            turn_cw: false,

            world_x_pos: false,
            world_x_neg: false,
            world_y_pos: false,
            world_y_neg: false,
            reset_world: false,

            scale_step: 0.01,
            move_step: 0.01,
            rotate_step: 1.0,
            world_rotate_step: 1.0,
        }
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is one of the object controls.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        if let Some(index) = Self::selection_index(key) {
            if pressed {
                self.pending_focus = Some(index);
            }
            return true;
        }

        match key {
            KeyCode::KeyU => { self.scale_up = pressed; true }
            KeyCode::KeyJ => { self.scale_down = pressed; true }
            KeyCode::KeyA => { self.move_left = pressed; true }
            KeyCode::KeyD => { self.move_right = pressed; true }
            KeyCode::KeyW => { self.move_forward = pressed; true }
            KeyCode::KeyS => { self.move_backward = pressed; true }
            KeyCode::KeyQ => { self.turn_ccw = pressed; true }
            KeyCode::KeyE => { self.turn_cw = pressed; true }
            KeyCode::ArrowLeft => { self.world_x_pos = pressed; true }
            KeyCode::ArrowRight => { self.world_x_neg = pressed; true }
            KeyCode::ArrowDown => { self.world_y_pos = pressed; true }
            KeyCode::ArrowUp => { self.world_y_neg = pressed; true }
            KeyCode::Home => { self.reset_world = pressed; true }
            _ => false,
        }
    }

    /// Model index selected by a key, if any
    fn selection_index(key: KeyCode) -> Option<usize> {
        match key {
            KeyCode::Digit1 | KeyCode::Numpad1 => Some(0),
            KeyCode::Digit2 | KeyCode::Numpad2 => Some(1),
            KeyCode::Digit3 | KeyCode::Numpad3 => Some(2),
            KeyCode::Digit4 | KeyCode::Numpad4 => Some(3),
            KeyCode::Digit5 | KeyCode::Numpad5 => Some(4),
            _ => None,
        }
    }

    /// Apply one frame of held input to the scene
    ///
    /// Returns true if the focus, a model transform or the world rotation
    /// was touched.
    pub fn update(&mut self, scene: &mut Scene) -> bool {
        let mut changed = false;

        if let Some(index) = self.pending_focus.take() {
            changed |= scene.focus(index);
        }

        let scale = axis(self.scale_up, self.scale_down) * self.scale_step;
        let dx = axis(self.move_right, self.move_left) * self.move_step;
        let dz = axis(self.move_backward, self.move_forward) * self.move_step;
        let turn = axis(self.turn_ccw, self.turn_cw) * self.rotate_step;

        if let Some(model) = scene.focused_mut() {
            if scale != 0.0 {
                model.transform.adjust_scale(scale);
                changed = true;
            }
            if dx != 0.0 || dz != 0.0 {
                model.transform.translate(Vec3::new(dx, 0.0, dz));
                changed = true;
            }
            if turn != 0.0 {
                model.transform.rotate(turn);
                changed = true;
            }
        }

        let world_x = axis(self.world_x_pos, self.world_x_neg) * self.world_rotate_step;
        let world_y = axis(self.world_y_pos, self.world_y_neg) * self.world_rotate_step;
        let world = scene.world_mut();
        if world_x != 0.0 {
            world.rotate_x(world_x);
            changed = true;
        }
        if world_y != 0.0 {
            world.rotate_y(world_y);
            changed = true;
        }
        if self.reset_world {
            world.reset();
            changed = true;
        }

        changed
    }

    /// Check if any held control is active
    pub fn is_active(&self) -> bool {
        self.scale_up || self.scale_down
            || self.move_left || self.move_right || self.move_forward || self.move_backward
            || self.turn_ccw || self.turn_cw
            || self.world_x_pos || self.world_x_neg || self.world_y_pos || self.world_y_neg
            || self.reset_world
    }

    /// Builder: set scale step per frame
    pub fn with_scale_step(mut self, step: f32) -> Self {
        self.scale_step = step;
        self
    }

    /// Builder: set movement step per frame
    pub fn with_move_step(mut self, step: f32) -> Self {
        self.move_step = step;
        self
    }

    /// Builder: set model rotation step per frame (degrees)
    pub fn with_rotate_step(mut self, step: f32) -> Self {
        self.rotate_step = step;
        self
    }

    /// Builder: set world rotation step per frame (degrees)
    pub fn with_world_rotate_step(mut self, step: f32) -> Self {
        self.world_rotate_step = step;
        self
    }
}

/// +1 for positive, -1 for negative, 0 for both or neither
fn axis(positive: bool, negative: bool) -> f32 {
    (positive as i32 - negative as i32) as f32
}
