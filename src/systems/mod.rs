//! Application systems
//!
//! Window handling, GPU rendering and the per-frame update, kept out of
//! main.rs so each can be tested on its own.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::{SimulationResult, SimulationSystem};
pub use window::{format_title, TitleState, WindowError, WindowSystem};
