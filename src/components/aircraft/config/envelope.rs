use serde::{Deserialize, Serialize};

use crate::utils::deg_to_rad;

/// Hard limits the integrator clamps the state into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightEnvelope {
    /// Never-exceed speed (m/s).
    pub max_speed: f64,
    /// Slowest forward speed the model allows (m/s). Lift and control
    /// authority ramp in linearly up to this speed.
    pub min_speed: f64,
    /// Service ceiling (m).
    pub max_altitude: f64,
    /// Pitch limit (rad), symmetric.
    pub max_pitch: f64,
    /// Bank limit (rad), symmetric.
    pub max_roll: f64,
}

impl Default for FlightEnvelope {
    fn default() -> Self {
        Self::cessna_208b()
    }
}

impl FlightEnvelope {
    pub fn cessna_208b() -> Self {
        Self {
            max_speed: 85.0, // ~165 kt
            min_speed: 30.0, // ~58 kt
            max_altitude: 7620.0, // 25,000 ft
            max_pitch: deg_to_rad(30.0),
            max_roll: deg_to_rad(60.0),
        }
    }
}
