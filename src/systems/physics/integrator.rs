use nalgebra::Vector3;

use crate::components::aircraft::FlightEnvelope;
use crate::utils::wrap_two_pi;

/// Forward speed after one step of `(thrust - drag) / mass`, clamped to the envelope.
pub fn integrate_forward_speed(
    speed: f64,
    thrust: f64,
    drag: f64,
    mass: f64,
    dt: f64,
    envelope: &FlightEnvelope,
) -> f64 {
    let accel = (thrust - drag) / mass;
    (speed + accel * dt).clamp(envelope.min_speed, envelope.max_speed)
}

/// Splits forward speed into a heading-aligned horizontal part and the given
/// vertical speed.
///
/// When the vertical speed exceeds the forward speed the horizontal part is
/// floored at zero, so the returned vector can be longer than `forward_speed`.
pub fn decompose_velocity(forward_speed: f64, vertical_speed: f64, yaw: f64) -> Vector3<f64> {
    let horizontal = (forward_speed * forward_speed - vertical_speed * vertical_speed)
        .max(0.0)
        .sqrt();

    Vector3::new(
        horizontal * yaw.cos(),
        vertical_speed,
        horizontal * yaw.sin(),
    )
}

/// Explicit Euler position step with the altitude clamped to [0, ceiling].
pub fn integrate_position(
    position: &Vector3<f64>,
    velocity: &Vector3<f64>,
    dt: f64,
    envelope: &FlightEnvelope,
) -> Vector3<f64> {
    let mut next = position + velocity * dt;
    next.y = next.y.clamp(0.0, envelope.max_altitude);
    next
}

/// Angular rate step with per-step damping, then an element-wise clamp.
///
/// The damping factor is applied once per call, not per second.
pub fn integrate_angular_velocity(
    angular_velocity: &Vector3<f64>,
    angular_accel: &Vector3<f64>,
    dt: f64,
    damping: f64,
    max_rate: f64,
) -> Vector3<f64> {
    ((angular_velocity + angular_accel * dt) * damping).map(|w| w.clamp(-max_rate, max_rate))
}

/// Attitude step: pitch and roll clamped to the envelope, yaw wrapped to [0, 2π).
pub fn integrate_attitude(
    attitude: &Vector3<f64>,
    angular_velocity: &Vector3<f64>,
    dt: f64,
    envelope: &FlightEnvelope,
) -> Vector3<f64> {
    let next = attitude + angular_velocity * dt;
    Vector3::new(
        next.x.clamp(-envelope.max_pitch, envelope.max_pitch),
        next.y.clamp(-envelope.max_roll, envelope.max_roll),
        wrap_two_pi(next.z),
    )
}
