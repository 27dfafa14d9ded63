use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::resources::config::SessionConfig;

/// Progress of one training exercise.
///
/// Weather worsens linearly with flight time and the score rewards surviving
/// in rough air.
#[derive(Debug, Clone)]
pub struct TrainingSession {
    config: SessionConfig,
    id: Uuid,
    started_at: DateTime<Utc>,
    /// Seconds flown.
    pub flight_time: f64,
    /// Disturbance intensity in [0, 1] handed to the aircraft update.
    pub weather_intensity: f64,
    pub score: u64,
}

/// The record handed to whatever persists high scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub score: u64,
    pub flight_time: f64,
    pub weather: f64,
}

impl Default for TrainingSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl TrainingSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            flight_time: 0.0,
            weather_intensity: 0.0,
            score: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn update(&mut self, dt: f64) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }
        self.flight_time += dt;
        self.weather_intensity = if self.config.weather_ramp_duration > 0.0 {
            (self.flight_time / self.config.weather_ramp_duration).min(1.0)
        } else {
            1.0
        };
        self.score = (self.flight_time * (1.0 + self.weather_intensity)).floor() as u64;
    }

    /// Start a fresh exercise under a new id.
    pub fn reset(&mut self) {
        debug!("Resetting session {} at score {}", self.id, self.score);
        *self = Self::new(self.config);
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            session_id: self.id,
            started_at: self.started_at,
            score: self.score,
            flight_time: self.flight_time,
            weather: self.weather_intensity,
        }
    }
}
