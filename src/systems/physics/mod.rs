mod angular;
mod integrator;
mod vertical;

pub use angular::{angular_acceleration, is_stalled};
pub use integrator::{
    decompose_velocity, integrate_angular_velocity, integrate_attitude, integrate_forward_speed,
    integrate_position,
};
pub use vertical::{smooth_vertical_speed, target_vertical_speed};
