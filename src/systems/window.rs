//! Window management system
//!
//! Handles window creation, fullscreen toggle, and title updates.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use glyph3d_render::RenderMode;

use crate::config::WindowConfig;

/// State shown in the window title
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleState {
    /// Zero-based index of the focused model
    pub focus: usize,
    pub model_count: usize,
    pub scale: f32,
    pub angle: f32,
    pub mode: RenderMode,
}

/// Build the window title for `state`
pub fn format_title(base: &str, state: &TitleState) -> String {
    format!(
        "{} - model {}/{} scale {:.2} angle {:.0} [{}]",
        base,
        state.focus + 1,
        state.model_count,
        state.scale,
        state.angle,
        state.mode.name()
    )
}

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
    last_title: Option<TitleState>,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
            last_title: None,
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Update window title, skipping the call when nothing changed
    pub fn update_title(&mut self, state: TitleState) {
        if self.last_title == Some(state) {
            return;
        }
        self.window.set_title(&format_title(&self.base_title, &state));
        self.last_title = Some(state);
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_formatting() {
        let state = TitleState {
            focus: 2,
            model_count: 5,
            scale: 1.25,
            angle: -30.0,
            mode: RenderMode::Line,
        };
        assert_eq!(
            format_title("Glyph3D", &state),
            "Glyph3D - model 3/5 scale 1.25 angle -30 [line]"
        );
    }

    #[test]
    fn test_window_error_display() {
        let err = WindowError::CreationFailed("no display".to_string());
        assert_eq!(err.to_string(), "Window creation failed: no display");
    }
}
