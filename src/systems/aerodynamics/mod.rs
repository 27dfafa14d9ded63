mod air_data;
mod force_calculator;

pub use air_data::{AirDataValues, MIN_AIRSPEED_THRESHOLD};
pub use force_calculator::{
    calculate_drag, calculate_lift, drag_coefficient, lift_coefficient,
};
