pub mod config;
pub mod environment;
pub mod session;

pub use config::{
    EnvironmentConfig, PhysicsConfig, SessionConfig, SimulationConfig, TurbulenceConfig,
};
pub use environment::Turbulence;
pub use session::{SessionSummary, TrainingSession};
