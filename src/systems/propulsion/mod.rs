mod engine;

pub use engine::{calculate_thrust, excess_specific_thrust, propeller_efficiency};
