use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::aircraft::config::{
    AircraftAeroCoefficients, FlightEnvelope, HandlingConfig, PropulsionConfig,
};
use crate::utils::deg_to_rad;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

/// Flat, human-editable aircraft description as stored in YAML.
///
/// Angles are in degrees and power in horsepower; conversion happens in
/// [`AircraftConfig`](super::AircraftConfig).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAircraftConfig {
    /// Aircraft identification
    pub name: String,

    /// Mass properties
    pub mass: f64,

    /// Geometry
    pub wing_area: f64,
    pub wing_span: f64,

    /// Powerplant
    pub max_power_hp: f64,

    /// Lift curve
    pub base_lift_coefficient: f64,
    pub max_lift_coefficient: f64,
    pub min_lift_coefficient: f64,
    pub stall_angle_deg: f64,

    /// Envelope
    pub max_speed: f64,
    pub min_speed: f64,
    pub max_altitude: f64,
    pub max_pitch_deg: f64,
    pub max_roll_deg: f64,

    /// Controls
    pub control_rate: f64,
    pub return_rate: f64,
    pub control_increment: f64,

    /// Everything else falls back to the stock handling model
    #[serde(default)]
    pub handling: Option<HandlingConfig>,
}

impl RawAircraftConfig {
    pub fn lift_and_drag(&self) -> AircraftAeroCoefficients {
        let mut coef = AircraftAeroCoefficients::cessna_208b();
        coef.lift.c_l_0 = self.base_lift_coefficient;
        coef.lift.c_l_max = self.max_lift_coefficient;
        coef.lift.c_l_min = self.min_lift_coefficient;
        coef.lift.stall_angle = deg_to_rad(self.stall_angle_deg);
        coef
    }

    pub fn envelope(&self) -> FlightEnvelope {
        FlightEnvelope {
            max_speed: self.max_speed,
            min_speed: self.min_speed,
            max_altitude: self.max_altitude,
            max_pitch: deg_to_rad(self.max_pitch_deg),
            max_roll: deg_to_rad(self.max_roll_deg),
        }
    }

    pub fn propulsion(&self) -> PropulsionConfig {
        PropulsionConfig::from_horsepower(self.max_power_hp)
    }

    pub fn handling_config(&self) -> HandlingConfig {
        let mut handling = self.handling.unwrap_or_default();
        handling.control_rate = self.control_rate;
        handling.return_rate = self.return_rate;
        handling.control_increment = self.control_increment;
        handling
    }
}
