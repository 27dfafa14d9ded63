pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.225; // kg/m^3
pub const WATTS_PER_HORSEPOWER: f64 = 745.7; // W/hp

pub const MAX_TIMESTEP: f64 = 0.1; // Largest step accepted by the dynamics update

// Initial conditions
pub const INITIAL_ALTITUDE: f64 = 1000.0; // m
pub const INITIAL_AIRSPEED: f64 = 50.0; // m/s
pub const INITIAL_THROTTLE: f64 = 0.5; // [0, 1]
