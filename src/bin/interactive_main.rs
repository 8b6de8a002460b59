use signal_controller::global_variables::DEFAULT_INTERACTIVE_CYCLES;
use signal_controller::sensors::interactive::collect_interactive_readings;
use signal_controller::simulate_traffic_controller;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let cycles = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Cycle count must be a non-negative integer, got '{}'", arg);
                return ExitCode::FAILURE;
            }
        },
        None => DEFAULT_INTERACTIVE_CYCLES,
    };

    println!("Interactive traffic controller input. You will be prompted for counts.");
    let readings = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        match collect_interactive_readings(cycles, &mut input, &mut output) {
            Ok(readings) => readings,
            Err(e) => {
                eprintln!("\nInput error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    };

    simulate_traffic_controller(cycles, Some(readings.as_slice()), None, true);
    ExitCode::SUCCESS
}
