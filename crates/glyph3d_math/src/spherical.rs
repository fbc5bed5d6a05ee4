//! Spherical camera angles
//!
//! The camera stores a horizontal angle (yaw) and vertical angle (pitch) in
//! degrees. Yaw 90 / pitch 0 looks down -Z.

use glam::Vec3;

/// Unit look direction for the given yaw and pitch (degrees)
///
/// `(cos(pitch) * cos(yaw), sin(pitch), -cos(pitch) * sin(yaw))`
pub fn look_direction(yaw_degrees: f32, pitch_degrees: f32) -> Vec3 {
    let theta = yaw_degrees.to_radians();
    let phi = pitch_degrees.to_radians();
    Vec3::new(phi.cos() * theta.cos(), phi.sin(), -phi.cos() * theta.sin())
}

/// Clamp pitch to `[-limit, limit]`
#[inline]
pub fn clamp_pitch(pitch_degrees: f32, limit: f32) -> f32 {
    pitch_degrees.clamp(-limit, limit)
}

/// Bring yaw back into `[-360, 360]` once it passes +/-360
pub fn wrap_yaw(yaw_degrees: f32) -> f32 {
    let mut yaw = yaw_degrees;
    while yaw > 360.0 {
        yaw -= 360.0;
    }
    while yaw < -360.0 {
        yaw += 360.0;
    }
    yaw
}
