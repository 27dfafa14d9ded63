//! Pure calculations behind the aircraft update.
//!
//! Nothing in here owns state; `Aircraft::update` calls these in order.

pub mod aerodynamics;
pub mod controller;
pub mod physics;
pub mod propulsion;

pub use aerodynamics::{calculate_drag, calculate_lift, lift_coefficient, AirDataValues};
pub use controller::{apply_control_input, update_control_surfaces};
pub use physics::{
    angular_acceleration, decompose_velocity, integrate_angular_velocity, integrate_attitude,
    integrate_forward_speed, integrate_position, is_stalled, smooth_vertical_speed,
    target_vertical_speed,
};
pub use propulsion::{calculate_thrust, excess_specific_thrust};
