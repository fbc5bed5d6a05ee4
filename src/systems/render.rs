//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The instanced cube pipeline
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use glyph3d_core::Scene;
use glyph3d_render::{collect_instances, Camera, ContextError, CubePipeline, RenderContext, RenderMode};

use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU could not be acquired
    Context(ContextError),
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "GPU initialisation failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: CubePipeline,
    render_config: RenderingConfig,
    mode: RenderMode,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = RenderContext::new(window, vsync)?;

        let mut pipeline = CubePipeline::new(&context.device, context.surface_format(), context.features);
        pipeline.ensure_depth_texture(
            &context.device,
            context.size.width,
            context.size.height,
        );

        Ok(Self {
            context,
            pipeline,
            render_config,
            mode: RenderMode::Fill,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline.ensure_depth_texture(
            &self.context.device,
            self.context.size.width,
            self.context.size.height,
        );
    }

    /// Reconfigure the surface after it was lost
    pub fn recover_surface(&self) {
        self.context.reconfigure();
    }

    /// Switch render mode, falling back to fill when unsupported
    ///
    /// Returns the mode that will actually be drawn.
    pub fn set_render_mode(&mut self, mode: RenderMode) -> RenderMode {
        self.mode = if self.pipeline.supports(mode) {
            mode
        } else {
            log::warn!("Render mode '{}' not supported by this GPU, using fill", mode.name());
            RenderMode::Fill
        };
        log::info!("Render mode: {}", self.mode.name());
        self.mode
    }

    pub fn render_mode(&self) -> RenderMode {
        self.mode
    }

    /// Render a single frame
    pub fn render_frame(&mut self, camera: &Camera, scene: &Scene) -> Result<(), RenderError> {
        let uniforms = camera.uniforms(self.context.aspect_ratio());
        self.pipeline.update_camera(&self.context.queue, &uniforms);

        let instances = collect_instances(&scene.draw_batches());
        self.pipeline
            .upload_instances(&self.context.device, &self.context.queue, &instances);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline
            .render(&mut encoder, &view, clear_color(&self.render_config), self.mode);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

fn clear_color(config: &RenderingConfig) -> wgpu::Color {
    let [r, g, b, a] = config.background_color;
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}
