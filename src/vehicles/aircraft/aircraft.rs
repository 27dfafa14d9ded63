use tracing::{debug, trace};

use crate::components::aircraft::{
    AircraftConfig, AircraftState, ControlAxis, ControlTargets, InstrumentReadings,
    PrimaryControl, Trim,
};
use crate::resources::{PhysicsConfig, SimulationConfig, Turbulence};
use crate::systems::{
    angular_acceleration, apply_control_input, calculate_drag, calculate_lift, calculate_thrust,
    decompose_velocity, excess_specific_thrust, integrate_angular_velocity, integrate_attitude,
    integrate_forward_speed, integrate_position, is_stalled, smooth_vertical_speed,
    target_vertical_speed, update_control_surfaces, AirDataValues,
};

/// Forces from the most recent update (N).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AeroForces {
    pub lift: f64,
    pub drag: f64,
    pub thrust: f64,
}

/// The trainer's flight dynamics model.
///
/// Owns the whole aircraft state and a private turbulence stream. All inputs
/// are clamped into range; no operation fails.
#[derive(Debug, Clone)]
pub struct Aircraft {
    config: AircraftConfig,
    physics: PhysicsConfig,
    state: AircraftState,
    turbulence: Turbulence,
    forces: AeroForces,
}

impl Default for Aircraft {
    fn default() -> Self {
        Self::new(AircraftConfig::default())
    }
}

impl Aircraft {
    pub fn new(config: AircraftConfig) -> Self {
        Self::from_simulation(config, &SimulationConfig::default())
    }

    pub fn with_seed(config: AircraftConfig, seed: u64) -> Self {
        Self::from_simulation(config, &SimulationConfig::default().with_seed(seed))
    }

    pub fn from_simulation(config: AircraftConfig, sim: &SimulationConfig) -> Self {
        Self {
            config,
            physics: sim.physics,
            state: AircraftState::default(),
            turbulence: Turbulence::new(sim.environment.turbulence, sim.seed),
            forces: AeroForces::default(),
        }
    }

    /// Advance the model by `dt` seconds.
    ///
    /// `dt` is truncated to the configured maximum step (0.1 s by default),
    /// so an infinite frame flies one maximum step. A `dt` that is zero,
    /// negative or NaN leaves the state untouched: the pitch-rate step divides
    /// by it. `disturbance_intensity` in [0, 1] scales the vertical gusts;
    /// 0 means calm air.
    pub fn update(&mut self, dt: f64, disturbance_intensity: f64) {
        if dt.is_nan() {
            debug!("Skipping update with NaN dt");
            return;
        }
        let dt = dt.min(self.physics.max_timestep);
        if !(dt > 0.0) {
            debug!("Skipping update with dt {}", dt);
            return;
        }

        let config = &self.config;
        let handling = &config.handling;
        let envelope = &config.envelope;
        let state = &mut self.state;

        update_control_surfaces(
            &mut state.control_surfaces,
            &state.control_targets,
            &state.trim,
            handling,
            dt,
        );
        let controls = state.control_surfaces;

        let air_data = AirDataValues::calculate(&state.velocity, envelope, self.physics.air_density);
        let speed = air_data.true_airspeed;
        let pitch = state.pitch();

        // Lift is reported only; vertical motion comes from the pitch/power model below
        let lift = calculate_lift(&config.geometry, &config.aero_coef.lift, &air_data, pitch);
        let drag = calculate_drag(
            &config.geometry,
            &config.aero_coef.drag,
            &air_data,
            controls.elevator,
            controls.throttle,
        );
        let thrust = calculate_thrust(
            &config.propulsion,
            controls.throttle,
            speed,
            envelope.max_speed,
        );

        let power_factor = handling.power_gain
            * excess_specific_thrust(
                &config.propulsion,
                thrust,
                handling.nominal_throttle,
                speed,
                envelope.max_speed,
                config.mass,
            );
        let target_vsi = target_vertical_speed(handling, speed, pitch, power_factor);
        let mut vertical_speed =
            smooth_vertical_speed(handling, state.vertical_speed(), target_vsi, dt);
        vertical_speed += self.turbulence.sample(disturbance_intensity);

        let forward_speed = integrate_forward_speed(speed, thrust, drag, config.mass, dt, envelope);
        state.velocity = decompose_velocity(forward_speed, vertical_speed, state.yaw());
        state.position = integrate_position(&state.position, &state.velocity, dt, envelope);

        let angular_accel = angular_acceleration(
            handling,
            config.aero_coef.lift.stall_angle,
            &state.attitude,
            &state.angular_velocity,
            &controls,
            air_data.speed_factor,
            dt,
        );
        state.angular_velocity = integrate_angular_velocity(
            &state.angular_velocity,
            &angular_accel,
            dt,
            handling.angular_damping,
            handling.max_angular_rate,
        );
        state.attitude = integrate_attitude(&state.attitude, &state.angular_velocity, dt, envelope);

        self.forces = AeroForces { lift, drag, thrust };
        trace!(
            "dt={:.3} speed={:.2} vsi={:.2} target_vsi={:.2} thrust={:.0} drag={:.0}",
            dt,
            forward_speed,
            vertical_speed,
            target_vsi,
            thrust,
            drag
        );
    }

    /// Move a control target by `direction` input steps.
    ///
    /// Only the target changes; the surface follows during `update`.
    pub fn apply_control_input(&mut self, control: PrimaryControl, direction: f64) {
        apply_control_input(
            &mut self.state.control_targets,
            control,
            direction,
            &self.config.handling,
        );
    }

    /// Set a control target outright, clamped to the control's range.
    pub fn set_control_target(&mut self, control: PrimaryControl, value: f64) {
        self.state.control_targets.set(control, value);
    }

    /// Store a trim offset, clamped to [-1, 1].
    pub fn set_trim(&mut self, axis: ControlAxis, value: f64) {
        self.state.trim.set(axis, value);
    }

    /// Trim by control name. Names without a trim axis are ignored.
    pub fn set_trim_by_name(&mut self, control: &str, value: f64) {
        match control.parse::<ControlAxis>() {
            Ok(axis) => self.set_trim(axis, value),
            Err(e) => debug!("Ignoring trim request: {}", e),
        }
    }

    /// Trim wheel: shift the current trim by `delta`.
    pub fn adjust_trim(&mut self, axis: ControlAxis, delta: f64) {
        let current = self.state.trim.get(axis);
        self.set_trim(axis, current + delta);
    }

    pub fn reset_trim(&mut self, axis: ControlAxis) {
        self.set_trim(axis, 0.0);
    }

    /// Current instrument readings. Pure; safe before the first update.
    pub fn get_instrument_readings(&self) -> InstrumentReadings {
        InstrumentReadings::from(&self.state)
    }

    /// Lift (N) at the current state.
    pub fn lift(&self) -> f64 {
        let air_data = AirDataValues::calculate(
            &self.state.velocity,
            &self.config.envelope,
            self.physics.air_density,
        );
        calculate_lift(
            &self.config.geometry,
            &self.config.aero_coef.lift,
            &air_data,
            self.state.pitch(),
        )
    }

    /// Forces computed by the most recent update; zero before the first one.
    pub fn forces(&self) -> AeroForces {
        self.forces
    }

    pub fn is_stalled(&self) -> bool {
        is_stalled(self.state.pitch(), self.config.aero_coef.lift.stall_angle)
    }

    /// Back to the initial conditions with the turbulence stream restarted.
    pub fn reset(&mut self) {
        let seed = self.turbulence.seed();
        self.reset_with_seed(seed);
    }

    pub fn reset_with_seed(&mut self, seed: u64) {
        debug!("Resetting {} with seed {}", self.config.name, seed);
        self.state = AircraftState::default();
        self.turbulence.reseed(seed);
        self.forces = AeroForces::default();
    }

    pub fn state(&self) -> &AircraftState {
        &self.state
    }

    /// Direct access for scenario set-up.
    pub fn state_mut(&mut self) -> &mut AircraftState {
        &mut self.state
    }

    pub fn control_targets(&self) -> &ControlTargets {
        &self.state.control_targets
    }

    pub fn trim(&self) -> &Trim {
        &self.state.trim
    }

    pub fn config(&self) -> &AircraftConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.turbulence.seed()
    }
}
