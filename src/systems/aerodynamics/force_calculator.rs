use crate::components::aircraft::{AircraftGeometry, DragCoefficients, LiftCoefficients};
use crate::systems::aerodynamics::AirDataValues;

/// Lift coefficient with angle of attack approximated by pitch.
///
/// Linear up to the stall angle, then an exponential collapse from `c_l_max`
/// that keeps the sign of `alpha`. The result is scaled by the low-speed
/// authority ramp.
pub fn lift_coefficient(coeffs: &LiftCoefficients, alpha: f64, speed_factor: f64) -> f64 {
    let c_l = if alpha.abs() <= coeffs.stall_angle {
        coeffs.c_l_0 * (1.0 + coeffs.c_l_alpha_factor * alpha / coeffs.stall_angle)
    } else {
        let excess = alpha.abs() - coeffs.stall_angle;
        (coeffs.c_l_max * (-coeffs.stall_decay * excess).exp()).copysign(alpha)
    };

    c_l * speed_factor
}

/// Lift force (N). Reported, not fed into the translational balance.
pub fn calculate_lift(
    geometry: &AircraftGeometry,
    coeffs: &LiftCoefficients,
    air_data: &AirDataValues,
    alpha: f64,
) -> f64 {
    air_data.dynamic_pressure
        * geometry.wing_area
        * lift_coefficient(coeffs, alpha, air_data.speed_factor)
}

/// Drag coefficient: parasitic plus elevator and propwash terms.
pub fn drag_coefficient(coeffs: &DragCoefficients, elevator: f64, throttle: f64) -> f64 {
    coeffs.c_d_0 + coeffs.c_d_elevator * elevator.abs() + coeffs.c_d_throttle * throttle
}

/// Drag force (N).
pub fn calculate_drag(
    geometry: &AircraftGeometry,
    coeffs: &DragCoefficients,
    air_data: &AirDataValues,
    elevator: f64,
    throttle: f64,
) -> f64 {
    air_data.dynamic_pressure * geometry.wing_area * drag_coefficient(coeffs, elevator, throttle)
}
