use flight_trainer::{
    components::aircraft::AircraftConfig, resources::SimulationConfig, Aircraft,
};

use super::calm_simulation_config;

// Builder for a single aircraft flown at a fixed frame rate
pub struct TestFlightBuilder {
    aircraft_config: AircraftConfig,
    sim_config: SimulationConfig,
    time_step: f64,
    intensity: f64,
}

impl Default for TestFlightBuilder {
    fn default() -> Self {
        Self {
            aircraft_config: AircraftConfig::default(),
            sim_config: calm_simulation_config(),
            time_step: super::DT,
            intensity: 0.0,
        }
    }
}

impl TestFlightBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aircraft(mut self, config: AircraftConfig) -> Self {
        self.aircraft_config = config;
        self
    }

    pub fn with_simulation(mut self, config: SimulationConfig) -> Self {
        self.sim_config = config;
        self
    }

    pub fn with_time_step(mut self, dt: f64) -> Self {
        self.time_step = dt;
        self
    }

    pub fn with_turbulence(mut self, seed: u64, intensity: f64) -> Self {
        self.sim_config = SimulationConfig::default().with_seed(seed);
        self.intensity = intensity;
        self
    }

    pub fn build(self) -> TestFlight {
        TestFlight {
            aircraft: Aircraft::from_simulation(self.aircraft_config, &self.sim_config),
            time_step: self.time_step,
            intensity: self.intensity,
        }
    }
}

pub struct TestFlight {
    pub aircraft: Aircraft,
    time_step: f64,
    intensity: f64,
}

impl TestFlight {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.aircraft.update(self.time_step, self.intensity);
        }
    }

    /// Run and hand each post-update aircraft to `inspect`
    pub fn run_steps_with<F: FnMut(&Aircraft)>(&mut self, steps: usize, mut inspect: F) {
        for _ in 0..steps {
            self.aircraft.update(self.time_step, self.intensity);
            inspect(&self.aircraft);
        }
    }
}
