pub mod aircraft;

pub use aircraft::{
    AircraftConfig, AircraftState, ControlAxis, ControlSurfaces, ControlTargets,
    InstrumentReadings, PrimaryControl, Trim,
};
