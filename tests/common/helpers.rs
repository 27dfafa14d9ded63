use flight_trainer::{
    components::aircraft::AircraftConfig,
    resources::{SimulationConfig, TurbulenceConfig},
};

/// Standard frame used by the training loop scenarios
pub const DT: f64 = 0.1;

/// Simulation settings with turbulence switched off
pub fn calm_simulation_config() -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.environment.turbulence = TurbulenceConfig {
        enabled: false,
        ..Default::default()
    };
    config
}

/// A small, sluggish aircraft used to check that parameters are not hard-coded
pub fn create_test_aircraft_config() -> AircraftConfig {
    let mut config = AircraftConfig::cessna_208b();
    config.name = "test_trainer".to_string();
    config.mass = 1200.0;
    config.envelope.max_speed = 60.0;
    config.envelope.min_speed = 25.0;
    config.handling.control_rate = 0.4;
    config
}

pub const TEST_AIRCRAFT_YAML: &str = r#"
name: YamlTrainer
mass: 1500.0
wing_area: 16.2
wing_span: 11.0
max_power_hp: 180.0
base_lift_coefficient: 0.7
max_lift_coefficient: 1.4
min_lift_coefficient: -0.4
stall_angle_deg: 16.0
max_speed: 70.0
min_speed: 25.0
max_altitude: 4000.0
max_pitch_deg: 25.0
max_roll_deg: 45.0
control_rate: 1.0
return_rate: 0.3
control_increment: 0.1
"#;
