use serde::{Deserialize, Serialize};

/// Configuration for the geometry of an aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftGeometry {
    /// The total wing area of the aircraft (m²).
    pub wing_area: f64,
    /// The wingspan of the aircraft (m).
    pub wing_span: f64,
}

impl AircraftGeometry {
    pub fn new(wing_area: f64, wing_span: f64) -> Self {
        AircraftGeometry {
            wing_area,
            wing_span,
        }
    }

    pub fn cessna_208b() -> Self {
        Self::new(26.0, 15.88)
    }
}
