use serde::{Deserialize, Serialize};

use super::state::AircraftState;
use crate::utils::rad_to_deg;

/// Snapshot of the cockpit instruments, in display units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstrumentReadings {
    /// Velocity magnitude (m/s).
    pub airspeed: f64,
    /// Altitude (m).
    pub altitude: f64,
    /// Heading in degrees, [0, 360).
    pub heading: f64,
    /// Pitch (deg), positive nose up.
    pub pitch: f64,
    /// Roll (deg).
    pub roll: f64,
    /// Vertical speed (m/s), positive up.
    pub vertical_speed: f64,
    pub throttle: f64,
    pub elevator: f64,
    pub aileron: f64,
    pub rudder: f64,
}

impl From<&AircraftState> for InstrumentReadings {
    fn from(state: &AircraftState) -> Self {
        Self {
            airspeed: state.airspeed(),
            altitude: state.altitude(),
            heading: rad_to_deg(state.yaw()).rem_euclid(360.0),
            pitch: rad_to_deg(state.pitch()),
            roll: rad_to_deg(state.roll()),
            vertical_speed: state.vertical_speed(),
            throttle: state.control_surfaces.throttle,
            elevator: state.control_surfaces.elevator,
            aileron: state.control_surfaces.aileron,
            rudder: state.control_surfaces.rudder,
        }
    }
}

impl InstrumentReadings {
    /// Vertical speed in feet per minute, as a VSI face shows it.
    pub fn vertical_speed_fpm(&self) -> f64 {
        self.vertical_speed * 196.850_394
    }
}
