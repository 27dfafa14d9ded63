use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{EnvironmentConfig, PhysicsConfig, SessionConfig};
use crate::components::aircraft::ConfigError;
use crate::utils::SimError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Master seed for every random stream in the simulation.
    pub seed: u64,
    pub physics: PhysicsConfig,
    pub environment: EnvironmentConfig,
    pub session: SessionConfig,
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the integrator cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let physics = &self.physics;
        if !(physics.max_timestep.is_finite() && physics.max_timestep > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "max_timestep must be positive, got {}",
                physics.max_timestep
            )));
        }
        if !(physics.air_density.is_finite() && physics.air_density > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "air_density must be positive, got {}",
                physics.air_density
            )));
        }
        let sigma = self.environment.turbulence.sigma;
        if !(sigma.is_finite() && sigma >= 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "turbulence sigma must be non-negative, got {}",
                sigma
            )));
        }
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
