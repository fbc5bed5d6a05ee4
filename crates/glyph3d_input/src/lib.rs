//! Input Handling
//!
//! This crate turns held keys and mouse movement into changes to the scene
//! and the camera. Both controllers record input as events arrive and apply
//! it once per frame in `update`.

mod camera_controller;
mod object_controller;

pub use camera_controller::{CameraControl, CameraController};
pub use object_controller::ObjectController;
