use serde::{Deserialize, Serialize};

use crate::utils::deg_to_rad;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftAeroCoefficients {
    pub lift: LiftCoefficients,
    pub drag: DragCoefficients,
}

/// Lift curve: linear below the stall angle, exponential collapse above it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftCoefficients {
    /// Lift coefficient at zero angle of attack.
    pub c_l_0: f64,
    /// Peak coefficient the post-stall decay starts from.
    pub c_l_max: f64,
    /// Most negative coefficient the airframe produces. Carried for completeness.
    pub c_l_min: f64,
    /// Slope factor: CL = c_l_0 * (1 + k * alpha / alpha_stall).
    pub c_l_alpha_factor: f64,
    /// Exponential decay rate per radian past the stall angle.
    pub stall_decay: f64,
    /// Critical angle of attack (rad).
    pub stall_angle: f64,
}

/// Parasitic plus control drag. There is no induced drag term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragCoefficients {
    /// Clean airframe drag coefficient.
    pub c_d_0: f64,
    /// Added per unit of elevator deflection (either sign).
    pub c_d_elevator: f64,
    /// Added per unit of throttle (propwash).
    pub c_d_throttle: f64,
}

impl Default for AircraftAeroCoefficients {
    fn default() -> Self {
        Self::cessna_208b()
    }
}

impl AircraftAeroCoefficients {
    pub fn cessna_208b() -> Self {
        Self {
            lift: LiftCoefficients {
                c_l_0: 0.8,
                c_l_max: 1.2,
                c_l_min: -0.5,
                c_l_alpha_factor: 2.0,
                stall_decay: 4.0,
                stall_angle: deg_to_rad(15.0),
            },
            drag: DragCoefficients {
                c_d_0: 0.02,
                c_d_elevator: 0.03,
                c_d_throttle: 0.01,
            },
        }
    }
}
