use flight_trainer::{components::aircraft::AircraftState, Aircraft};
use std::f64::consts::TAU;

const EPS: f64 = 1e-9;

/// Assert every component of the state is finite
#[track_caller]
pub fn assert_state_finite(state: &AircraftState) {
    for (name, v) in [
        ("position", state.position),
        ("velocity", state.velocity),
        ("attitude", state.attitude),
        ("angular velocity", state.angular_velocity),
    ] {
        assert!(v.iter().all(|x| x.is_finite()), "{} is not finite: {:?}", name, v);
    }
}

/// Assert surfaces, targets and trim sit inside their ranges
#[track_caller]
pub fn assert_controls_in_range(state: &AircraftState) {
    assert!(
        state.control_surfaces.in_range(),
        "Surfaces out of range: {:?}",
        state.control_surfaces
    );
    assert!(
        state.control_targets.in_range(),
        "Targets out of range: {:?}",
        state.control_targets
    );
    for v in [state.trim.elevator, state.trim.aileron, state.trim.rudder] {
        assert!((-1.0..=1.0).contains(&v), "Trim out of range: {:?}", state.trim);
    }
}

/// Assert the aircraft is inside its flight envelope
#[track_caller]
pub fn assert_envelope_valid(aircraft: &Aircraft) {
    let state = aircraft.state();
    let envelope = &aircraft.config().envelope;
    let handling = &aircraft.config().handling;

    assert_state_finite(state);
    assert_controls_in_range(state);

    let airspeed = state.airspeed();
    assert!(
        airspeed >= envelope.min_speed - EPS,
        "Airspeed {} below minimum {}",
        airspeed,
        envelope.min_speed
    );
    // A vertical speed larger than the forward speed lengthens the vector
    let ceiling = envelope.max_speed.max(state.vertical_speed().abs());
    assert!(
        airspeed <= ceiling + EPS,
        "Airspeed {} above maximum {}",
        airspeed,
        ceiling
    );
    assert!(
        state.horizontal_speed() <= envelope.max_speed + EPS,
        "Horizontal speed {} above maximum",
        state.horizontal_speed()
    );

    assert!(
        (0.0..=envelope.max_altitude).contains(&state.altitude()),
        "Altitude {} outside [0, {}]",
        state.altitude(),
        envelope.max_altitude
    );
    assert!(
        state.pitch().abs() <= envelope.max_pitch + EPS,
        "Pitch {} beyond limit",
        state.pitch()
    );
    assert!(
        state.roll().abs() <= envelope.max_roll + EPS,
        "Roll {} beyond limit",
        state.roll()
    );
    assert!(
        (0.0..TAU).contains(&state.yaw()),
        "Yaw {} not in [0, 2π)",
        state.yaw()
    );
    assert!(
        state
            .angular_velocity
            .iter()
            .all(|w| w.abs() <= handling.max_angular_rate + EPS),
        "Angular rate beyond limit: {:?}",
        state.angular_velocity
    );
}
