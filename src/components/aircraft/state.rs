use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::controls::{ControlSurfaces, ControlTargets, Trim};
use crate::utils::{INITIAL_AIRSPEED, INITIAL_ALTITUDE, INITIAL_THROTTLE};

/// Full physical and control state of the aircraft.
///
/// Axes: x lateral, y altitude (up), z longitudinal. Heading 0 points along +x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    /// Position (m).
    pub position: Vector3<f64>,
    /// Velocity (m/s); y is the vertical speed.
    pub velocity: Vector3<f64>,
    /// Pitch, roll, yaw (rad).
    pub attitude: Vector3<f64>,
    /// Pitch, roll, yaw rates (rad/s).
    pub angular_velocity: Vector3<f64>,
    /// Current control positions.
    pub control_surfaces: ControlSurfaces,
    /// Positions the controls are moving toward.
    pub control_targets: ControlTargets,
    /// Trim offsets added to the targets.
    pub trim: Trim,
}

impl Default for AircraftState {
    /// Straight and level at 1000 m, 50 m/s, half power.
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, INITIAL_ALTITUDE, 0.0),
            velocity: Vector3::new(INITIAL_AIRSPEED, 0.0, 0.0),
            attitude: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            control_surfaces: ControlSurfaces::with_throttle(INITIAL_THROTTLE),
            control_targets: ControlTargets::with_throttle(INITIAL_THROTTLE),
            trim: Trim::default(),
        }
    }
}

impl AircraftState {
    pub fn pitch(&self) -> f64 {
        self.attitude.x
    }

    pub fn roll(&self) -> f64 {
        self.attitude.y
    }

    pub fn yaw(&self) -> f64 {
        self.attitude.z
    }

    pub fn altitude(&self) -> f64 {
        self.position.y
    }

    /// Magnitude of the velocity vector (m/s).
    pub fn airspeed(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn vertical_speed(&self) -> f64 {
        self.velocity.y
    }

    pub fn horizontal_speed(&self) -> f64 {
        self.velocity.x.hypot(self.velocity.z)
    }

    /// Replace the attitude, keeping everything else.
    pub fn with_attitude(mut self, pitch: f64, roll: f64, yaw: f64) -> Self {
        self.attitude = Vector3::new(pitch, roll, yaw);
        self
    }

    /// Replace the velocity, keeping everything else.
    pub fn with_velocity(mut self, velocity: Vector3<f64>) -> Self {
        self.velocity = velocity;
        self
    }
}
