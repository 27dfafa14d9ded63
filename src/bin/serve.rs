use std::{
    env,
    io::{BufRead, BufReader, Write},
    net::{TcpListener, TcpStream},
};

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use flight_trainer::{
    components::aircraft::AircraftConfig,
    resources::SimulationConfig,
    server::{handle_command, Command, Response},
    simulation::Simulation,
    utils::SimError,
};

/// Optional paths: `trainer_serve [aircraft.yaml] [simulation.yaml]`.
fn main() -> Result<(), SimError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let aircraft = match args.next() {
        Some(path) => AircraftConfig::from_file(path)?,
        None => AircraftConfig::default(),
    };
    let config = match args.next() {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    let listener = TcpListener::bind("127.0.0.1:0")?;
    println!("PORT={}", listener.local_addr()?.port());

    // One client per run
    let (stream, addr) = listener.accept()?;
    info!("Client connected from {}", addr);

    let mut sim = Simulation::new(aircraft, config)?;
    serve(&mut sim, stream)?;

    let summary = sim.summary();
    info!(
        "Session {} finished: score {} after {:.1}s",
        summary.session_id, summary.score, summary.flight_time
    );
    Ok(())
}

fn serve(sim: &mut Simulation, stream: TcpStream) -> Result<(), SimError> {
    let mut writer = stream.try_clone()?;
    let reader = BufReader::new(stream);

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let (response, close) = match serde_json::from_str::<Command>(&line) {
            Ok(cmd) => {
                let close = cmd == Command::Close;
                (handle_command(sim, cmd), close)
            }
            Err(e) => {
                error!("Failed to parse command: {}", e);
                (Response::error(format!("Invalid command format: {}", e)), false)
            }
        };

        let response_str = serde_json::to_string(&response)? + "\n";
        writer.write_all(response_str.as_bytes())?;
        writer.flush()?;

        if close {
            return Ok(());
        }
    }

    warn!("Client disconnected without Close");
    Ok(())
}
