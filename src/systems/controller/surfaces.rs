use crate::components::aircraft::{
    ControlAxis, ControlSurfaces, ControlTargets, HandlingConfig, PrimaryControl, Trim,
};
use crate::utils::approach;

/// Slews each surface toward its target.
///
/// Elevator, aileron and rudder chase `target + trim` at `control_rate`; the
/// power lever chases its target at `throttle_rate` with no trim.
pub fn update_control_surfaces(
    surfaces: &mut ControlSurfaces,
    targets: &ControlTargets,
    trim: &Trim,
    handling: &HandlingConfig,
    dt: f64,
) {
    let max_step = handling.control_rate * dt;
    for axis in ControlAxis::ALL {
        let control = PrimaryControl::from(axis);
        let target = targets.get(control) + trim.get(axis);
        // target + trim can reach ±2; the surface itself stays in range
        surfaces.set(control, approach(surfaces.get(control), target, max_step));
    }

    surfaces.throttle = approach(
        surfaces.throttle,
        targets.throttle,
        handling.throttle_rate * dt,
    );
}

/// Nudges a control target by `direction` input steps.
///
/// The throttle moves by `throttle_increment` per step, everything else by
/// `control_increment`; the result is clamped to the control's range.
pub fn apply_control_input(
    targets: &mut ControlTargets,
    control: PrimaryControl,
    direction: f64,
    handling: &HandlingConfig,
) {
    let increment = match control {
        PrimaryControl::Throttle => handling.throttle_increment,
        _ => handling.control_increment,
    };
    targets.set(control, targets.get(control) + direction * increment);
}
