pub mod config;
pub mod controls;
pub mod instruments;
pub mod state;

pub use config::{
    AircraftAeroCoefficients, AircraftConfig, AircraftGeometry, AircraftSource, AircraftType,
    ConfigError, DragCoefficients, FlightEnvelope, HandlingConfig, LiftCoefficients,
    PropulsionConfig, RawAircraftConfig,
};
pub use controls::{
    ControlAxis, ControlSurfaces, ControlTargets, PrimaryControl, Trim, UnknownControl,
};
pub use instruments::InstrumentReadings;
pub use state::AircraftState;
