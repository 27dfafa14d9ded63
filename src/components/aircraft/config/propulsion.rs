use serde::{Deserialize, Serialize};

use crate::utils::WATTS_PER_HORSEPOWER;

/// Powerplant configuration.
///
/// Thrust is modelled as `max_power * throttle`, scaled down quadratically as
/// airspeed approaches the never-exceed speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropulsionConfig {
    /// Rated shaft power (W).
    pub max_power: f64,
}

impl PropulsionConfig {
    pub fn from_horsepower(hp: f64) -> Self {
        Self {
            max_power: hp * WATTS_PER_HORSEPOWER,
        }
    }

    /// PT6A-114A, 675 shp.
    pub fn cessna_208b() -> Self {
        Self::from_horsepower(675.0)
    }
}
