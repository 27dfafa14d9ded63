use serde::{Deserialize, Serialize};

/// Training exercise tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seconds of flight until the weather reaches full intensity.
    pub weather_ramp_duration: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            weather_ramp_duration: 300.0,
        }
    }
}
