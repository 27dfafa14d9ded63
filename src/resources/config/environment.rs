use serde::{Deserialize, Serialize};

/// Vertical gust model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurbulenceConfig {
    /// When false the disturbance intensity passed to the update is ignored.
    pub enabled: bool,
    /// Standard deviation of the per-step vertical-speed kick at full intensity (m/s).
    pub sigma: f64,
}

impl Default for TurbulenceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sigma: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub turbulence: TurbulenceConfig,
}
