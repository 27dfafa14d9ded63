use std::f64::consts::{PI, TAU};

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Move `current` toward `target` by at most `max_step`, never overshooting.
///
/// This is the rate-limited pursuit used for control surfaces, vertical speed
/// and pitch rate.
#[inline]
pub fn approach(current: f64, target: f64, max_step: f64) -> f64 {
    if target > current {
        target.min(current + max_step)
    } else {
        target.max(current - max_step)
    }
}

/// Wrap an angle into `[0, 2π)`.
#[inline]
pub fn wrap_two_pi(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Linear ramp from 0 at zero speed to 1 at `min_speed`, saturating above it.
#[inline]
pub fn speed_factor(speed: f64, min_speed: f64) -> f64 {
    (speed / min_speed).clamp(0.0, 1.0)
}
