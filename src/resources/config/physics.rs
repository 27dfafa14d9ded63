use serde::{Deserialize, Serialize};

use crate::utils::{MAX_TIMESTEP, SEA_LEVEL_AIR_DENSITY};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Constant air density used for dynamic pressure (kg/m³).
    pub air_density: f64,
    /// Longer frames are truncated to this step (s).
    pub max_timestep: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            air_density: SEA_LEVEL_AIR_DENSITY,
            max_timestep: MAX_TIMESTEP,
        }
    }
}
