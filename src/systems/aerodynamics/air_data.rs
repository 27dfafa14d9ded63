use nalgebra::Vector3;

use crate::components::aircraft::FlightEnvelope;
use crate::utils::speed_factor;

/// Below this the speed is floored to keep the force model finite.
pub const MIN_AIRSPEED_THRESHOLD: f64 = 1.0;

/// Air data derived once per step and shared by the force and moment models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirDataValues {
    /// Velocity magnitude clamped to [1, max_speed] (m/s).
    pub true_airspeed: f64,
    /// 0.5 * rho * V² (Pa).
    pub dynamic_pressure: f64,
    /// Air density (kg/m³).
    pub density: f64,
    /// Authority ramp: 0 at rest, 1 at and above min_speed.
    pub speed_factor: f64,
}

impl AirDataValues {
    pub fn calculate(velocity: &Vector3<f64>, envelope: &FlightEnvelope, density: f64) -> Self {
        let airspeed = velocity
            .norm()
            .clamp(MIN_AIRSPEED_THRESHOLD, envelope.max_speed);

        Self {
            true_airspeed: airspeed,
            dynamic_pressure: 0.5 * density * airspeed * airspeed,
            density,
            speed_factor: speed_factor(airspeed, envelope.min_speed),
        }
    }
}
