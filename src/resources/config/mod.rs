pub mod environment;
pub mod physics;
pub mod session;
pub mod simulation;

pub use environment::{EnvironmentConfig, TurbulenceConfig};
pub use physics::PhysicsConfig;
pub use session::SessionConfig;
pub use simulation::SimulationConfig;
