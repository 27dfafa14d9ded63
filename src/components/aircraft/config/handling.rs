use serde::{Deserialize, Serialize};

/// Tuning of the control response and the simplified vertical/angular model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandlingConfig {
    /// Surface slew rate toward target + trim (units/s).
    pub control_rate: f64,
    /// Power lever slew rate (units/s).
    pub throttle_rate: f64,
    /// Self-centring rate. Carried in the config; the model does not centre surfaces.
    pub return_rate: f64,
    /// Target change per elevator/aileron/rudder input.
    pub control_increment: f64,
    /// Target change per throttle input.
    pub throttle_increment: f64,

    /// Angular acceleration (rad/s²) per unit of surface deflection.
    pub control_effectiveness: f64,
    /// Max change of pitch rate per second (rad/s²).
    pub pitch_rate_slew: f64,
    /// Per-step multiplicative damping of the angular rates.
    pub angular_damping: f64,
    /// Symmetric clamp on each angular rate (rad/s).
    pub max_angular_rate: f64,

    /// Max change of vertical speed per second (m/s²).
    pub vsi_rate: f64,
    /// Climb gain on `speed * sin(pitch)` inside the normal pitch band.
    pub climb_gain: f64,
    /// Gain on excess specific thrust.
    pub power_gain: f64,
    /// Throttle setting that holds level flight.
    pub nominal_throttle: f64,
    /// Pitch (deg) beyond which climb authority decays.
    pub critical_pitch_deg: f64,
    /// Decay rate per degree past the critical pitch.
    pub high_pitch_decay: f64,
    /// Sink (m/s) added per degree past the critical pitch.
    pub high_pitch_sink: f64,

    /// Nose-down acceleration per radian past the stall angle.
    pub stall_pitch_moment: f64,
    /// Scale applied to every angular acceleration while stalled.
    pub stall_control_scale: f64,
    /// Bank (rad) above which a stalled wing drops.
    pub stall_roll_threshold: f64,
    /// Wing-drop roll acceleration (rad/s²).
    pub stall_roll_moment: f64,
}

impl Default for HandlingConfig {
    fn default() -> Self {
        Self {
            control_rate: 0.8,
            throttle_rate: 0.5,
            return_rate: 0.3,
            control_increment: 0.15,
            throttle_increment: 0.1,

            control_effectiveness: 8.0,
            pitch_rate_slew: 6.0,
            angular_damping: 0.9,
            max_angular_rate: 1.5,

            vsi_rate: 8.0,
            climb_gain: 2.0,
            power_gain: 2.0,
            nominal_throttle: 0.5,
            critical_pitch_deg: 15.0,
            high_pitch_decay: 0.8,
            high_pitch_sink: 0.8,

            stall_pitch_moment: 60.0,
            stall_control_scale: 0.005,
            stall_roll_threshold: 0.1,
            stall_roll_moment: 20.0,
        }
    }
}
