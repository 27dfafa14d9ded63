mod assertions;
mod helpers;
mod test_flight;

// Re-export
pub use assertions::{assert_controls_in_range, assert_envelope_valid, assert_state_finite};
pub use helpers::*;
pub use test_flight::{TestFlight, TestFlightBuilder};
