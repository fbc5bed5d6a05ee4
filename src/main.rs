//! Glyph3D - seven-segment letter/ID scene viewer
//!
//! Renders five "PE 28" style labels built from cube segments around a grid,
//! with keyboard control of the focused label and mouse control of the camera.

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use glyph3d::config::AppConfig;
use glyph3d::input::{InputAction, InputMapper};
use glyph3d::scene::SceneBuilder;
use glyph3d::systems::{RenderError, RenderSystem, SimulationSystem, TitleState, WindowSystem};
use glyph3d_core::{Scene, Vec3};
use glyph3d_input::{CameraController, ObjectController};
use glyph3d_render::Camera;

/// Main application state
struct App {
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    simulation: SimulationSystem,
    scene: Scene,
    camera: Camera,
    objects: ObjectController,
    camera_controller: CameraController,
}

impl App {
    fn new(config: AppConfig, scene: Scene) -> Self {
        let [x, y, z] = config.camera.start_position;
        let camera = Camera::new()
            .with_position(Vec3::new(x, y, z))
            .with_pitch_limit(config.camera.pitch_limit)
            .with_angles(config.camera.yaw, config.camera.pitch)
            .with_fov(config.camera.fov, config.camera.min_fov, config.camera.max_fov)
            .with_clip_planes(config.camera.near, config.camera.far);

        let input = &config.input;
        let objects = ObjectController::new()
            .with_scale_step(input.scale_step)
            .with_move_step(input.move_step)
            .with_rotate_step(input.rotate_step)
            .with_world_rotate_step(input.world_rotate_step);

        let camera_controller = CameraController::new()
            .with_pan_speed(input.pan_speed)
            .with_fast_pan_speed(input.fast_pan_speed)
            .with_tilt_sensitivity(input.tilt_sensitivity)
            .with_zoom_step(input.zoom_step)
            .with_drag_threshold(input.drag_threshold);

        Self {
            config,
            window: None,
            render: None,
            simulation: SimulationSystem::new(),
            scene,
            camera,
            objects,
            camera_controller,
        }
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::ResetCamera => {
                self.camera.reset();
                log::info!("Camera reset to starting position");
            }
            InputAction::SetRenderMode(mode) => {
                if let Some(render) = &mut self.render {
                    render.set_render_mode(mode);
                }
            }
        }
    }

    fn title_state(&self) -> Option<TitleState> {
        let model = self.scene.focused()?;
        Some(TitleState {
            focus: self.scene.focus_index(),
            model_count: self.scene.model_count(),
            scale: model.transform.scale,
            angle: model.transform.angle,
            mode: self.render.as_ref().map(|r| r.render_mode()).unwrap_or_default(),
        })
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.simulation.update(
            &mut self.scene,
            &mut self.camera,
            &mut self.objects,
            &mut self.camera_controller,
        );

        if self.config.debug.show_state_in_title {
            if let (Some(state), Some(window)) = (self.title_state(), &mut self.window) {
                window.update_title(state);
            }
        }

        if let Some(render) = &mut self.render {
            match render.render_frame(&self.camera, &self.scene) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => render.recover_surface(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        match RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            self.config.window.vsync,
        ) {
            Ok(render) => self.render = Some(render),
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(action, event_loop);
                        return;
                    }
                    self.camera_controller.process_keyboard(key, event.state);
                    self.objects.process_keyboard(key, event.state);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.camera_controller.process_mouse_button(button, state);
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.camera_controller.process_mouse_motion(delta.0, delta.1);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG still overrides the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting Glyph3D");
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let scene = SceneBuilder::from_config(&config.scene, &config.rendering)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, scene);
    event_loop.run_app(&mut app)?;
    Ok(())
}
