use crate::components::aircraft::{AircraftState, InstrumentReadings};

/// Anything the training loop can fly.
pub trait Vehicle {
    type State;

    /// Advance by `dt` seconds in air of the given roughness, [0, 1].
    fn update(&mut self, dt: f64, disturbance_intensity: f64);
    fn get_state(&self) -> &Self::State;
    fn readings(&self) -> InstrumentReadings;
    fn reset(&mut self, seed: u64);
}

impl Vehicle for super::Aircraft {
    type State = AircraftState;

    fn update(&mut self, dt: f64, disturbance_intensity: f64) {
        super::Aircraft::update(self, dt, disturbance_intensity);
    }

    fn get_state(&self) -> &AircraftState {
        self.state()
    }

    fn readings(&self) -> InstrumentReadings {
        self.get_instrument_readings()
    }

    fn reset(&mut self, seed: u64) {
        self.reset_with_seed(seed);
    }
}
