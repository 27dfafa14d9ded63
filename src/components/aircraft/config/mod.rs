mod aero_coef;
mod aircraft;
mod envelope;
mod geometry;
mod handling;
mod loader;
mod propulsion;

pub use aero_coef::{AircraftAeroCoefficients, DragCoefficients, LiftCoefficients};
pub use aircraft::{AircraftConfig, AircraftSource, AircraftType};
pub use envelope::FlightEnvelope;
pub use geometry::AircraftGeometry;
pub use handling::HandlingConfig;
pub use loader::{ConfigError, RawAircraftConfig};
pub use propulsion::PropulsionConfig;
