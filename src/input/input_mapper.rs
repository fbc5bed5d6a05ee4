//! Input mapping from raw events to application actions
//!
//! Maps keyboard input to actions that affect the application rather than
//! the scene, like Exit or switching the render mode. Object and camera
//! controls are NOT mapped here - they go directly to the controllers.

use glyph3d_render::RenderMode;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by application keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Toggle fullscreen mode (F11)
    ToggleFullscreen,
    /// Reset camera to its starting viewpoint (R)
    ResetCamera,
    /// Draw as points (P), as lines (L) or filled triangles (T)
    SetRenderMode(RenderMode),
}

/// Maps raw input events to application actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` on press of an application key, `None` otherwise
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::F11 => Some(InputAction::ToggleFullscreen),
            KeyCode::KeyR => Some(InputAction::ResetCamera),
            KeyCode::KeyP => Some(InputAction::SetRenderMode(RenderMode::Point)),
            KeyCode::KeyL => Some(InputAction::SetRenderMode(RenderMode::Line)),
            KeyCode::KeyT => Some(InputAction::SetRenderMode(RenderMode::Fill)),
            _ => None,
        }
    }
}
