mod turbulence;

pub use turbulence::{Turbulence, TURBULENCE_STREAM};
