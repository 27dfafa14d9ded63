use crate::components::aircraft::HandlingConfig;
use crate::utils::{approach, rad_to_deg};

/// Vertical speed the airframe settles toward at the current pitch and power.
///
/// Within the critical pitch band this is `climb_gain * V * sin(pitch)` plus
/// the excess-power term. Past it, climb authority decays exponentially per
/// degree and a linear sink is added.
pub fn target_vertical_speed(
    handling: &HandlingConfig,
    speed: f64,
    pitch: f64,
    power_factor: f64,
) -> f64 {
    let pitch_deg = rad_to_deg(pitch);

    if pitch_deg.abs() <= handling.critical_pitch_deg {
        speed * pitch.sin() * handling.climb_gain + power_factor
    } else {
        let excess = pitch_deg.abs() - handling.critical_pitch_deg;
        let reduction = (-handling.high_pitch_decay * excess).exp();
        (speed * pitch.sin() + power_factor) * reduction - excess * handling.high_pitch_sink
    }
}

/// Rate-limited step of the vertical speed toward its target.
pub fn smooth_vertical_speed(handling: &HandlingConfig, current: f64, target: f64, dt: f64) -> f64 {
    approach(current, target, handling.vsi_rate * dt)
}
