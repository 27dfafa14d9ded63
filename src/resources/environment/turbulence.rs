use rand_chacha::ChaCha8Rng;

use crate::resources::config::TurbulenceConfig;
use crate::utils::{standard_normal, RngManager};

/// Name of the turbulence stream under the simulation's master seed.
pub const TURBULENCE_STREAM: &str = "turbulence";

/// Seeded source of zero-mean Gaussian vertical gusts.
///
/// Each aircraft owns its own source, so independent instances never share
/// random state and a fixed seed replays the same gusts.
#[derive(Debug, Clone)]
pub struct Turbulence {
    config: TurbulenceConfig,
    seed: u64,
    rng: ChaCha8Rng,
}

impl Turbulence {
    pub fn new(config: TurbulenceConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            rng: RngManager::new(seed).get_rng(TURBULENCE_STREAM),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &TurbulenceConfig {
        &self.config
    }

    /// Restart the stream, optionally under a new seed.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = RngManager::new(seed).get_rng(TURBULENCE_STREAM);
    }

    /// Vertical-speed kick (m/s) for one step.
    ///
    /// Intensity is clamped to [0, 1]; NaN counts as calm. Calm air, or a
    /// disabled model, returns 0 without advancing the stream.
    pub fn sample(&mut self, intensity: f64) -> f64 {
        let intensity = if intensity.is_nan() {
            0.0
        } else {
            intensity.clamp(0.0, 1.0)
        };
        if !self.config.enabled || intensity == 0.0 {
            return 0.0;
        }
        standard_normal(&mut self.rng) * self.config.sigma * intensity
    }
}
