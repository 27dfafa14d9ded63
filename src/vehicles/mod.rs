pub mod aircraft;
mod traits;

pub use aircraft::{AeroForces, Aircraft};
pub use traits::Vehicle;
