mod common;

use flight_trainer::{resources::SimulationConfig, Aircraft, AircraftConfig, PrimaryControl};
use nalgebra::Vector3;
use pretty_assertions::assert_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::TAU;

use common::{assert_envelope_valid, TestFlightBuilder};

const CONTROLS: [PrimaryControl; 4] = [
    PrimaryControl::Elevator,
    PrimaryControl::Aileron,
    PrimaryControl::Rudder,
    PrimaryControl::Throttle,
];

#[test]
fn test_envelope_holds_under_random_inputs() {
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut flight = TestFlightBuilder::new().build();

        for _ in 0..300 {
            let control = CONTROLS[rng.gen_range(0..CONTROLS.len())];
            flight
                .aircraft
                .apply_control_input(control, rng.gen_range(-4.0..=4.0));
            if rng.gen_bool(0.1) {
                let axis = [
                    flight_trainer::ControlAxis::Elevator,
                    flight_trainer::ControlAxis::Aileron,
                    flight_trainer::ControlAxis::Rudder,
                ][rng.gen_range(0..3)];
                flight.aircraft.set_trim(axis, rng.gen_range(-1.5..=1.5));
            }

            flight.aircraft.update(rng.gen_range(0.001..0.3), 0.0);
            assert_envelope_valid(&flight.aircraft);
        }
    }
}

#[test]
fn test_envelope_holds_in_rough_air() {
    let mut flight = TestFlightBuilder::new().with_turbulence(21, 1.0).build();
    flight.aircraft.apply_control_input(PrimaryControl::Throttle, -5.0);
    flight.run_steps_with(600, assert_envelope_valid);
}

#[test]
fn test_overspeed_is_clamped() {
    let mut aircraft = Aircraft::default();
    aircraft.state_mut().velocity = Vector3::new(200.0, 0.0, 0.0);
    aircraft.update(0.1, 0.0);

    assert!(aircraft.state().airspeed() <= 85.0 + 1e-9);
    assert_envelope_valid(&aircraft);
}

#[test]
fn test_underspeed_is_clamped() {
    let mut aircraft = Aircraft::default();
    aircraft.state_mut().velocity = Vector3::new(5.0, 0.0, 0.0);
    aircraft.set_control_target(PrimaryControl::Throttle, 0.0);
    aircraft.update(0.1, 0.0);

    assert!(aircraft.state().airspeed() >= 30.0 - 1e-9);
    assert_envelope_valid(&aircraft);
}

#[test]
fn test_attitude_is_pulled_back_into_envelope() {
    let mut aircraft = Aircraft::default();
    {
        let state = aircraft.state_mut();
        state.attitude = Vector3::new(1.2, -2.0, -0.5);
        state.angular_velocity = Vector3::new(10.0, -10.0, 0.0);
    }
    aircraft.update(0.1, 0.0);

    let state = aircraft.state();
    let envelope = &aircraft.config().envelope;
    assert_eq!(state.pitch(), envelope.max_pitch);
    assert_eq!(state.roll(), -envelope.max_roll);
    assert!((0.0..TAU).contains(&state.yaw()));
    assert!(state.angular_velocity.iter().all(|w| w.abs() <= 1.5));
}

#[test]
fn test_altitude_stays_above_ground() {
    let mut aircraft = Aircraft::default();
    {
        let state = aircraft.state_mut();
        state.position.y = 1.0;
        state.velocity = Vector3::new(40.0, -30.0, 0.0);
    }
    aircraft.update(0.1, 0.0);
    assert_eq!(aircraft.state().altitude(), 0.0);
}

#[test]
fn test_turbulence_is_reproducible() {
    let fly = |seed: u64| {
        let mut aircraft = Aircraft::from_simulation(
            AircraftConfig::default(),
            &SimulationConfig::default().with_seed(seed),
        );
        for _ in 0..100 {
            aircraft.update(0.1, 1.0);
        }
        aircraft.state().clone()
    };

    assert_eq!(fly(7), fly(7));
    assert_ne!(fly(7), fly(8));
}

#[test]
fn test_instances_do_not_share_random_state() {
    let mut a = Aircraft::with_seed(AircraftConfig::default(), 3);
    let mut b = Aircraft::with_seed(AircraftConfig::default(), 3);

    // Interleaving one instance must not disturb the other
    for _ in 0..10 {
        a.update(0.1, 1.0);
    }
    for _ in 0..10 {
        b.update(0.1, 1.0);
    }
    assert_eq!(a.state(), b.state());
}

#[test]
fn test_reset_replays_the_same_gusts() {
    let mut aircraft = Aircraft::with_seed(AircraftConfig::default(), 12);
    for _ in 0..30 {
        aircraft.update(0.1, 1.0);
    }
    let first = aircraft.state().clone();

    aircraft.reset();
    for _ in 0..30 {
        aircraft.update(0.1, 1.0);
    }
    assert_eq!(aircraft.state(), &first);
}
