use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Control surfaces that carry a trim offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlAxis {
    Elevator,
    Aileron,
    Rudder,
}

impl ControlAxis {
    pub const ALL: [ControlAxis; 3] = [Self::Elevator, Self::Aileron, Self::Rudder];
}

/// Every pilot control, including the power lever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryControl {
    Elevator,
    Aileron,
    Rudder,
    Throttle,
}

impl PrimaryControl {
    /// Valid range of the surface (and its target).
    pub fn range(self) -> (f64, f64) {
        match self {
            Self::Throttle => (0.0, 1.0),
            _ => (-1.0, 1.0),
        }
    }

    /// The trimmable axis behind this control, if any.
    pub fn axis(self) -> Option<ControlAxis> {
        match self {
            Self::Elevator => Some(ControlAxis::Elevator),
            Self::Aileron => Some(ControlAxis::Aileron),
            Self::Rudder => Some(ControlAxis::Rudder),
            Self::Throttle => None,
        }
    }
}

impl From<ControlAxis> for PrimaryControl {
    fn from(axis: ControlAxis) -> Self {
        match axis {
            ControlAxis::Elevator => Self::Elevator,
            ControlAxis::Aileron => Self::Aileron,
            ControlAxis::Rudder => Self::Rudder,
        }
    }
}

/// Error returned when a control name is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown control '{0}'")]
pub struct UnknownControl(pub String);

impl FromStr for PrimaryControl {
    type Err = UnknownControl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "elevator" => Ok(Self::Elevator),
            "aileron" => Ok(Self::Aileron),
            "rudder" => Ok(Self::Rudder),
            "throttle" => Ok(Self::Throttle),
            _ => Err(UnknownControl(s.to_string())),
        }
    }
}

impl FromStr for ControlAxis {
    type Err = UnknownControl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimaryControl::from_str(s)?
            .axis()
            .ok_or_else(|| UnknownControl(s.to_string()))
    }
}

/// Positions of the primary controls.
///
/// Used both for the surfaces themselves and for the targets they chase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlSurfaces {
    /// Elevator position [-1, 1]; negative pulls the nose up.
    pub elevator: f64,
    /// Aileron position [-1, 1].
    pub aileron: f64,
    /// Rudder position [-1, 1].
    pub rudder: f64,
    /// Power lever [0, 1].
    pub throttle: f64,
}

/// Desired control positions, moved only by pilot input.
pub type ControlTargets = ControlSurfaces;

impl Default for ControlSurfaces {
    fn default() -> Self {
        Self {
            elevator: 0.0,
            aileron: 0.0,
            rudder: 0.0,
            throttle: 0.0,
        }
    }
}

impl ControlSurfaces {
    /// Neutral stick and rudder with the given power setting.
    pub fn with_throttle(throttle: f64) -> Self {
        Self {
            throttle: throttle.clamp(0.0, 1.0),
            ..Default::default()
        }
    }

    pub fn get(&self, control: PrimaryControl) -> f64 {
        match control {
            PrimaryControl::Elevator => self.elevator,
            PrimaryControl::Aileron => self.aileron,
            PrimaryControl::Rudder => self.rudder,
            PrimaryControl::Throttle => self.throttle,
        }
    }

    /// Store a value, clamped to the control's range. NaN is ignored.
    pub fn set(&mut self, control: PrimaryControl, value: f64) {
        if value.is_nan() {
            return;
        }
        let (lo, hi) = control.range();
        let value = value.clamp(lo, hi);
        match control {
            PrimaryControl::Elevator => self.elevator = value,
            PrimaryControl::Aileron => self.aileron = value,
            PrimaryControl::Rudder => self.rudder = value,
            PrimaryControl::Throttle => self.throttle = value,
        }
    }

    pub fn in_range(&self) -> bool {
        [
            PrimaryControl::Elevator,
            PrimaryControl::Aileron,
            PrimaryControl::Rudder,
            PrimaryControl::Throttle,
        ]
        .iter()
        .all(|&c| {
            let (lo, hi) = c.range();
            (lo..=hi).contains(&self.get(c))
        })
    }
}

/// Persistent trim offsets, one per trimmable axis, each in [-1, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Trim {
    pub elevator: f64,
    pub aileron: f64,
    pub rudder: f64,
}

impl Trim {
    pub fn get(&self, axis: ControlAxis) -> f64 {
        match axis {
            ControlAxis::Elevator => self.elevator,
            ControlAxis::Aileron => self.aileron,
            ControlAxis::Rudder => self.rudder,
        }
    }

    /// Store an offset clamped to [-1, 1]. NaN is ignored.
    pub fn set(&mut self, axis: ControlAxis, value: f64) {
        if value.is_nan() {
            return;
        }
        let value = value.clamp(-1.0, 1.0);
        match axis {
            ControlAxis::Elevator => self.elevator = value,
            ControlAxis::Aileron => self.aileron = value,
            ControlAxis::Rudder => self.rudder = value,
        }
    }
}
