pub mod components;
pub mod resources;
pub mod server;
pub mod simulation;
pub mod systems;
pub mod utils;
pub mod vehicles;

pub use components::aircraft::{
    AircraftConfig, AircraftState, ControlAxis, InstrumentReadings, PrimaryControl,
};
pub use simulation::Simulation;
pub use vehicles::Aircraft;
