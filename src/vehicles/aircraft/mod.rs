mod aircraft;

pub use aircraft::{AeroForces, Aircraft};
