use serde::{Deserialize, Serialize};

use crate::components::aircraft::{InstrumentReadings, PrimaryControl};
use crate::resources::SessionSummary;
use crate::utils::SimError;

/// Commands a client sends, one JSON object per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Advance the simulation `steps` times by `dt` seconds.
    Step {
        dt: f64,
        #[serde(default = "default_steps")]
        steps: u32,
    },
    /// Nudge a control target by `direction` input increments.
    Control {
        control: PrimaryControl,
        direction: f64,
    },
    /// Set a control target outright.
    SetTarget { control: PrimaryControl, value: f64 },
    /// Set a trim offset. Names without a trim axis are ignored.
    Trim { control: String, value: f64 },
    /// Restart the exercise with an optional new seed.
    Reset { seed: Option<u64> },
    /// Close the connection.
    Close,
}

fn default_steps() -> u32 {
    1
}

/// What the server writes back for each command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    State {
        readings: InstrumentReadings,
        session: SessionSummary,
    },
    Error {
        error: String,
    },
}

impl Response {
    pub fn error(msg: impl Into<String>) -> Self {
        Response::Error { error: msg.into() }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}

impl From<SimError> for Response {
    fn from(err: SimError) -> Self {
        Response::error(err.to_string())
    }
}
