//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`G3D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub input: InputConfig,
    pub scene: SceneConfig,
    pub rendering: RenderingConfig,
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    ///
    /// Missing files are skipped; missing keys take their defaults.
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            log::debug!("Applying user config {}", user_path.display());
            figment = figment.merge(Toml::file(&user_path));
        }

        // G3D_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("G3D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Width in logical pixels
    pub width: u32,
    /// Height in logical pixels
    pub height: u32,
    pub fullscreen: bool,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Glyph3D - Seven-Segment Scene".to_string(),
            width: 1024,
            height: 768,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting position [x, y, z]
    pub start_position: [f32; 3],
    /// Starting yaw in degrees (90 looks down -Z)
    pub yaw: f32,
    /// Starting pitch in degrees
    pub pitch: f32,
    /// Starting field of view in degrees
    pub fov: f32,
    /// Narrowest field of view in degrees
    pub min_fov: f32,
    /// Widest field of view in degrees
    pub max_fov: f32,
    pub near: f32,
    pub far: f32,
    /// Maximum pitch angle in degrees
    pub pitch_limit: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_position: [0.6, 1.0, 10.0],
            yaw: 90.0,
            pitch: 0.0,
            fov: 45.0,
            min_fov: 1.0,
            max_fov: 45.0,
            near: 0.01,
            far: 100.0,
            pitch_limit: 85.0,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Camera pan speed (units per second)
    pub pan_speed: f32,
    /// Camera pan speed with Shift held
    pub fast_pan_speed: f32,
    /// Tilt degrees per pixel of drag per second
    pub tilt_sensitivity: f32,
    /// Mouse deltas within this many pixels are ignored for pan and zoom
    pub drag_threshold: f32,
    /// Field of view change per zoom step (degrees)
    pub zoom_step: f32,
    /// Model scale change per frame
    pub scale_step: f32,
    /// Model movement per frame
    pub move_step: f32,
    /// Model rotation per frame (degrees)
    pub rotate_step: f32,
    /// World rotation per frame (degrees)
    pub world_rotate_step: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            pan_speed: 5.0,
            fast_pan_speed: 25.0,
            tilt_sensitivity: 40.0,
            drag_threshold: 5.0,
            zoom_step: 1.0,
            scale_step: 0.01,
            move_step: 0.01,
            rotate_step: 1.0,
            world_rotate_step: 1.0,
        }
    }
}

/// Scene layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Text shown by every letter/ID model
    pub label: String,
    /// Number of grid cells along each axis
    pub grid_size: u32,
    /// Side of one grid cell in world units
    pub grid_unit: f32,
    /// Axis indicator length in grid units
    pub axis_length_units: f32,
    /// Distance of the ring models from the origin in grid units
    pub ring_distance: f32,
    /// Sideways offset of the 3, 6 and 9 o'clock models in grid units
    pub ring_offset: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            label: "PE 28".to_string(),
            grid_size: 128,
            grid_unit: 0.2,
            axis_length_units: 7.0,
            ring_distance: 50.0,
            ring_offset: 15.0,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    pub grid_color: [f32; 3],
    pub x_axis_color: [f32; 3],
    pub y_axis_color: [f32; 3],
    pub z_axis_color: [f32; 3],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            grid_color: [1.0, 1.0, 1.0],
            x_axis_color: [1.0, 0.0, 0.0],
            y_axis_color: [0.0, 1.0, 0.0],
            z_axis_color: [0.0, 0.0, 1.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Show focus and transform state in the window title
    pub show_state_in_title: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_state_in_title: true,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
