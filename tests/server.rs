mod common;

use flight_trainer::{
    resources::SessionSummary,
    server::{handle_command, Command, Response},
    InstrumentReadings, PrimaryControl, Simulation,
};
use pretty_assertions::assert_eq;
use std::{
    io::{BufRead, BufReader, Write},
    net::TcpStream,
    process::{Command as Process, Stdio},
};

fn expect_state(response: Response) -> (InstrumentReadings, SessionSummary) {
    match response {
        Response::State { readings, session } => (readings, session),
        Response::Error { error } => panic!("unexpected error response: {}", error),
    }
}

#[test]
fn test_training_exchange() {
    let mut sim = Simulation::default();

    expect_state(handle_command(
        &mut sim,
        Command::SetTarget {
            control: PrimaryControl::Throttle,
            value: 0.8,
        },
    ));
    expect_state(handle_command(
        &mut sim,
        Command::Trim {
            control: "elevator".to_string(),
            value: -0.1,
        },
    ));
    let (readings, session) =
        expect_state(handle_command(&mut sim, Command::Step { dt: 0.1, steps: 20 }));

    assert!(readings.throttle > 0.5);
    assert!(readings.elevator < 0.0);
    assert!(readings.pitch > 0.0);
    assert!((session.flight_time - 2.0).abs() < 1e-9);
    assert!(session.weather > 0.0);
}

#[test]
fn test_unknown_trim_name_is_ignored() {
    let mut sim = Simulation::default();
    let before = sim.aircraft.state().clone();
    expect_state(handle_command(
        &mut sim,
        Command::Trim {
            control: "throttle".to_string(),
            value: 0.5,
        },
    ));
    assert_eq!(sim.aircraft.state(), &before);
}

#[test]
fn test_reset_starts_a_new_session() {
    let mut sim = Simulation::default();
    let (_, first) = expect_state(handle_command(&mut sim, Command::Step { dt: 0.1, steps: 10 }));

    let (readings, session) = expect_state(handle_command(&mut sim, Command::Reset { seed: Some(5) }));
    assert_eq!(readings.altitude, 1000.0);
    assert_eq!(readings.airspeed, 50.0);
    assert_eq!(session.score, 0);
    assert_ne!(session.session_id, first.session_id);
    assert_eq!(sim.config().seed, 5);
}

#[test]
fn test_oversized_step_is_rejected() {
    let mut sim = Simulation::default();
    let response = handle_command(&mut sim, Command::Step { dt: 0.1, steps: 1_000_000 });
    assert!(response.is_error());
    assert_eq!(sim.session.flight_time, 0.0);
}

#[test]
fn test_serve_binary_over_tcp() {
    let mut child = Process::new(env!("CARGO_BIN_EXE_trainer_serve"))
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let mut stdout = BufReader::new(child.stdout.take().unwrap());
    let mut line = String::new();
    stdout.read_line(&mut line).unwrap();
    let port: u16 = line.trim().strip_prefix("PORT=").unwrap().parse().unwrap();

    let mut stream = TcpStream::connect(("127.0.0.1", port)).unwrap();
    let mut reader = BufReader::new(stream.try_clone().unwrap());
    let mut exchange = |request: &str| -> serde_json::Value {
        stream.write_all(request.as_bytes()).unwrap();
        stream.write_all(b"\n").unwrap();
        let mut reply = String::new();
        reader.read_line(&mut reply).unwrap();
        serde_json::from_str(&reply).unwrap()
    };

    let reply = exchange(r#"{"Control": {"control": "throttle", "direction": 3}}"#);
    assert_eq!(reply["readings"]["throttle"], 0.5);

    let reply = exchange(r#"{"Step": {"dt": 0.1, "steps": 10}}"#);
    assert!(reply["readings"]["throttle"].as_f64().unwrap() > 0.5);
    assert!(reply["session"]["flight_time"].as_f64().unwrap() > 0.9);

    let reply = exchange(r#"{"Fly": {}}"#);
    assert!(reply["error"].as_str().unwrap().contains("Invalid command"));

    let reply = exchange(r#""Close""#);
    assert!(reply.get("readings").is_some());

    assert!(child.wait().unwrap().success());
}
