use nalgebra::Vector3;

use crate::components::aircraft::{ControlSurfaces, HandlingConfig};
use crate::utils::approach;

/// True when the pitch-as-AoA approximation is past the critical angle.
#[inline]
pub fn is_stalled(pitch: f64, stall_angle: f64) -> bool {
    pitch.abs() > stall_angle
}

/// Angular acceleration (pitch, roll, yaw) in rad/s².
///
/// Pitch follows a rate-limited target rate of `-elevator * effectiveness`;
/// roll and yaw accelerate directly with aileron and rudder. In a stall a
/// nose-down moment is added, authority collapses, and a banked wing drops.
/// Everything is scaled by the low-speed authority ramp.
///
/// `dt` must be positive: the pitch term divides by it.
pub fn angular_acceleration(
    handling: &HandlingConfig,
    stall_angle: f64,
    attitude: &Vector3<f64>,
    angular_velocity: &Vector3<f64>,
    controls: &ControlSurfaces,
    speed_factor: f64,
    dt: f64,
) -> Vector3<f64> {
    let pitch = attitude.x;
    let roll = attitude.y;
    let effectiveness = handling.control_effectiveness;

    let target_pitch_rate = -controls.elevator * effectiveness;
    let current_pitch_rate = angular_velocity.x;
    let pitch_rate = approach(
        current_pitch_rate,
        target_pitch_rate,
        handling.pitch_rate_slew * dt,
    );

    let mut accel = Vector3::new(
        (pitch_rate - current_pitch_rate) / dt,
        controls.aileron * effectiveness,
        controls.rudder * effectiveness,
    );

    if is_stalled(pitch, stall_angle) {
        accel.x -= handling.stall_pitch_moment * (pitch.abs() - stall_angle);
        accel *= handling.stall_control_scale;

        if roll.abs() > handling.stall_roll_threshold {
            accel.y += roll.signum() * handling.stall_roll_moment;
        }
    }

    accel * speed_factor
}
