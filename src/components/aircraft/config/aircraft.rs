use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::components::aircraft::config::{
    AircraftAeroCoefficients, AircraftGeometry, ConfigError, FlightEnvelope, HandlingConfig,
    PropulsionConfig, RawAircraftConfig,
};
use crate::systems::aerodynamics::MIN_AIRSPEED_THRESHOLD;
use crate::utils::rad_to_deg;

/// The full aircraft configuration: mass, geometry, aerodynamics, powerplant,
/// envelope and handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    /// Name of the aircraft, defaults to type name.
    pub name: String,
    /// Type of aircraft.
    pub ac_type: AircraftType,
    /// Gross mass (kg).
    pub mass: f64,
    /// The geometric properties of the aircraft.
    pub geometry: AircraftGeometry,
    /// Lift and drag model coefficients.
    pub aero_coef: AircraftAeroCoefficients,
    /// Powerplant.
    pub propulsion: PropulsionConfig,
    /// Limits the state is clamped into.
    pub envelope: FlightEnvelope,
    /// Control response and simplified flight model tuning.
    pub handling: HandlingConfig,
}

impl Default for AircraftConfig {
    /// The Caravan is the trainer's only programmed type.
    fn default() -> Self {
        Self::cessna_208b()
    }
}

impl AircraftConfig {
    /// Creates a new aircraft configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - An `AircraftSource` enum specifying if the configuration is hardcoded
    ///              (`Programmed`) or loaded from a file (`File`).
    pub fn new(source: AircraftSource) -> Result<Self, ConfigError> {
        match source {
            AircraftSource::Programmed(aircraft_type) => Ok(Self::from_programmed(aircraft_type)),
            AircraftSource::File(path) => Self::from_file(path),
        }
    }

    fn from_programmed(aircraft_type: AircraftType) -> Self {
        match aircraft_type {
            AircraftType::Cessna208B => Self {
                name: "Cessna208B".to_string(),
                ac_type: AircraftType::Cessna208B,
                mass: 3969.0,
                geometry: AircraftGeometry::cessna_208b(),
                aero_coef: AircraftAeroCoefficients::cessna_208b(),
                propulsion: PropulsionConfig::cessna_208b(),
                envelope: FlightEnvelope::cessna_208b(),
                handling: HandlingConfig::default(),
            },
            AircraftType::Custom(name) => Self {
                name: name.clone(),
                ac_type: AircraftType::Custom(name),
                ..Self::from_programmed(AircraftType::Cessna208B)
            },
        }
    }

    /// Creates an aircraft configuration by reading a flat YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file_contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&file_contents)?;
        info!("Loaded aircraft '{}' from {}", config.name, path.display());
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let raw_config: RawAircraftConfig = serde_yaml::from_str(yaml)?;
        Self::from_raw_config(raw_config)
    }

    /// Maps the flat YAML structure onto the nested config and validates it.
    pub fn from_raw_config(raw: RawAircraftConfig) -> Result<Self, ConfigError> {
        let config = Self {
            name: raw.name.clone(),
            ac_type: AircraftType::Custom(raw.name.clone()),
            mass: raw.mass,
            geometry: AircraftGeometry::new(raw.wing_area, raw.wing_span),
            aero_coef: raw.lift_and_drag(),
            propulsion: raw.propulsion(),
            envelope: raw.envelope(),
            handling: raw.handling_config(),
        };
        config.validate()?;
        Ok(config)
    }

    /// The flat representation, suitable for writing back to YAML.
    pub fn to_raw_config(&self) -> RawAircraftConfig {
        RawAircraftConfig {
            name: self.name.clone(),
            mass: self.mass,
            wing_area: self.geometry.wing_area,
            wing_span: self.geometry.wing_span,
            max_power_hp: self.propulsion.max_power / crate::utils::WATTS_PER_HORSEPOWER,
            base_lift_coefficient: self.aero_coef.lift.c_l_0,
            max_lift_coefficient: self.aero_coef.lift.c_l_max,
            min_lift_coefficient: self.aero_coef.lift.c_l_min,
            stall_angle_deg: rad_to_deg(self.aero_coef.lift.stall_angle),
            max_speed: self.envelope.max_speed,
            min_speed: self.envelope.min_speed,
            max_altitude: self.envelope.max_altitude,
            max_pitch_deg: rad_to_deg(self.envelope.max_pitch),
            max_roll_deg: rad_to_deg(self.envelope.max_roll),
            control_rate: self.handling.control_rate,
            return_rate: self.handling.return_rate,
            control_increment: self.handling.control_increment,
            handling: Some(self.handling),
        }
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(&self.to_raw_config())?)
    }

    /// Rejects parameter sets the dynamics cannot integrate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("mass", self.mass),
            ("wing_area", self.geometry.wing_area),
            ("max_power", self.propulsion.max_power),
            ("min_speed", self.envelope.min_speed),
            ("max_altitude", self.envelope.max_altitude),
            ("max_pitch", self.envelope.max_pitch),
            ("max_roll", self.envelope.max_roll),
            ("stall_angle", self.aero_coef.lift.stall_angle),
            ("control_rate", self.handling.control_rate),
            ("throttle_rate", self.handling.throttle_rate),
            ("control_increment", self.handling.control_increment),
            ("throttle_increment", self.handling.throttle_increment),
            ("pitch_rate_slew", self.handling.pitch_rate_slew),
            ("vsi_rate", self.handling.vsi_rate),
            ("max_angular_rate", self.handling.max_angular_rate),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }

        let max_speed = self.envelope.max_speed;
        if !(max_speed.is_finite() && max_speed >= MIN_AIRSPEED_THRESHOLD) {
            return Err(ConfigError::ValidationError(format!(
                "max_speed must be at least {} m/s, got {}",
                MIN_AIRSPEED_THRESHOLD, max_speed
            )));
        }

        if self.envelope.min_speed >= self.envelope.max_speed {
            return Err(ConfigError::ValidationError(format!(
                "min_speed ({}) must be below max_speed ({})",
                self.envelope.min_speed, self.envelope.max_speed
            )));
        }

        if !(0.0..=1.0).contains(&self.handling.angular_damping) {
            return Err(ConfigError::ValidationError(format!(
                "angular_damping must lie in [0, 1], got {}",
                self.handling.angular_damping
            )));
        }

        Ok(())
    }

    pub fn cessna_208b() -> Self {
        Self::from_programmed(AircraftType::Cessna208B)
    }
}

/// Source for aircraft configuration.
/// Can either be a hardcoded configuration (`Programmed`) or loaded from a file.
#[derive(Debug, Clone)]
pub enum AircraftSource {
    Programmed(AircraftType),
    File(PathBuf),
}

/// Enumeration of available aircraft types.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum AircraftType {
    Cessna208B,
    Custom(String),
}
