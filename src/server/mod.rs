//! Headless JSON-lines command protocol for driving a simulation remotely.

mod handler;
mod structures;

pub use handler::{handle_command, state_response, MAX_STEPS_PER_COMMAND};
pub use structures::{Command, Response};
