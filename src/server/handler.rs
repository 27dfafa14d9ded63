use tracing::{debug, info, warn};

use super::structures::{Command, Response};
use crate::simulation::Simulation;
use crate::utils::SimError;

/// Largest number of steps a single `Step` command may request.
pub const MAX_STEPS_PER_COMMAND: u32 = 10_000;

/// Apply one command to the simulation and describe the result.
pub fn handle_command(sim: &mut Simulation, cmd: Command) -> Response {
    match cmd {
        Command::Step { dt, steps } => {
            if !(dt.is_finite() && dt > 0.0) {
                warn!("Rejecting step with dt {}", dt);
                return SimError::InvalidCommand(format!(
                    "dt must be positive and finite, got {}",
                    dt
                ))
                .into();
            }
            if steps > MAX_STEPS_PER_COMMAND {
                return SimError::InvalidCommand(format!(
                    "at most {} steps per command, got {}",
                    MAX_STEPS_PER_COMMAND, steps
                ))
                .into();
            }
            debug!("Stepping {} x {:.3}s", steps, dt);
            for _ in 0..steps {
                sim.step(dt);
            }
        }
        Command::Control { control, direction } => {
            sim.aircraft.apply_control_input(control, direction);
        }
        Command::SetTarget { control, value } => {
            sim.aircraft.set_control_target(control, value);
        }
        Command::Trim { control, value } => {
            sim.aircraft.set_trim_by_name(&control, value);
        }
        Command::Reset { seed } => {
            info!("Reset command received with seed: {:?}", seed);
            sim.reset(seed);
        }
        Command::Close => {
            info!("Close command received");
        }
    }

    state_response(sim)
}

pub fn state_response(sim: &Simulation) -> Response {
    Response::State {
        readings: sim.readings(),
        session: sim.summary(),
    }
}
