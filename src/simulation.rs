use tracing::info;

use crate::components::aircraft::{AircraftConfig, InstrumentReadings};
use crate::resources::{SessionSummary, SimulationConfig, TrainingSession};
use crate::utils::SimError;
use crate::vehicles::{Aircraft, Vehicle};

/// One training exercise: the aircraft plus the session driving its weather.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub aircraft: Aircraft,
    pub session: TrainingSession,
    config: SimulationConfig,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::build(AircraftConfig::default(), SimulationConfig::default())
    }
}

impl Simulation {
    pub fn new(aircraft: AircraftConfig, config: SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self::build(aircraft, config))
    }

    fn build(aircraft: AircraftConfig, config: SimulationConfig) -> Self {
        info!(
            "Starting simulation for {} with seed {}",
            aircraft.name, config.seed
        );
        Self {
            aircraft: Aircraft::from_simulation(aircraft, &config),
            session: TrainingSession::new(config.session),
            config,
        }
    }

    /// Fly one frame, then advance session time.
    pub fn step(&mut self, dt: f64) {
        fly(&mut self.aircraft, &mut self.session, dt);
    }

    /// Restart both the aircraft and the session; a new seed replaces the old one.
    pub fn reset(&mut self, seed: Option<u64>) {
        if let Some(seed) = seed {
            self.config.seed = seed;
        }
        info!(
            "Session {} ended with score {}",
            self.session.id(),
            self.session.score
        );
        Vehicle::reset(&mut self.aircraft, self.config.seed);
        self.session.reset();
    }

    pub fn readings(&self) -> InstrumentReadings {
        self.aircraft.get_instrument_readings()
    }

    pub fn summary(&self) -> SessionSummary {
        self.session.summary()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

/// One frame of the training loop for any vehicle.
///
/// The vehicle flies in the weather left by the previous frame; the session
/// clock advances afterwards.
pub fn fly<V: Vehicle>(vehicle: &mut V, session: &mut TrainingSession, dt: f64) {
    vehicle.update(dt, session.weather_intensity);
    session.update(dt);
}
