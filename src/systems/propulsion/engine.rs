use crate::components::aircraft::PropulsionConfig;

/// Fraction of static thrust left at `speed`: falls off quadratically and
/// reaches zero at the never-exceed speed.
#[inline]
pub fn propeller_efficiency(speed: f64, max_speed: f64) -> f64 {
    1.0 - (speed / max_speed).powi(2)
}

/// Thrust (N) for a throttle setting at the given airspeed.
pub fn calculate_thrust(
    propulsion: &PropulsionConfig,
    throttle: f64,
    speed: f64,
    max_speed: f64,
) -> f64 {
    propulsion.max_power * throttle * propeller_efficiency(speed, max_speed)
}

/// Specific excess thrust (m/s²) over the thrust produced at the nominal
/// cruise power setting. Never negative.
pub fn excess_specific_thrust(
    propulsion: &PropulsionConfig,
    thrust: f64,
    nominal_throttle: f64,
    speed: f64,
    max_speed: f64,
    mass: f64,
) -> f64 {
    let nominal = calculate_thrust(propulsion, nominal_throttle, speed, max_speed);
    (thrust - nominal).max(0.0) / mass
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_static_thrust_scales_with_throttle() {
        let prop = PropulsionConfig { max_power: 1000.0 };
        assert_eq!(calculate_thrust(&prop, 0.5, 0.0, 85.0), 500.0);
        assert_eq!(calculate_thrust(&prop, 0.0, 40.0, 85.0), 0.0);
    }

    #[test]
    fn test_thrust_vanishes_at_max_speed() {
        let prop = PropulsionConfig::cessna_208b();
        assert_relative_eq!(calculate_thrust(&prop, 1.0, 85.0, 85.0), 0.0);
        assert_relative_eq!(propeller_efficiency(42.5, 85.0), 0.75);
    }

    #[test]
    fn test_excess_thrust_is_floored() {
        let prop = PropulsionConfig { max_power: 1000.0 };
        let low = calculate_thrust(&prop, 0.2, 0.0, 85.0);
        assert_eq!(excess_specific_thrust(&prop, low, 0.5, 0.0, 85.0, 10.0), 0.0);

        let high = calculate_thrust(&prop, 1.0, 0.0, 85.0);
        assert_relative_eq!(excess_specific_thrust(&prop, high, 0.5, 0.0, 85.0, 10.0), 50.0);
    }
}
