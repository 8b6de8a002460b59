// simulation_main.rs
use signal_controller::models::CycleRecord;
use signal_controller::monitoring::{summarize, write_log_csv, write_log_json};
use signal_controller::sensors::sensor_reader::read_sensor_script;
use signal_controller::simulation_engine::scenarios::{
    deterministic_readings, emergency_directives, emergency_readings, RANDOM_DEMO_CYCLES,
};
use signal_controller::simulation_engine::{ExportFormat, RunOptions};
use signal_controller::{Simulation, SimulationError, SimulationInputs};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Simulation error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), SimulationError> {
    let options = RunOptions::from_args(std::env::args().skip(1))?;
    let simulation = Simulation::new(options.config)?;

    let logs = if options.script_from_stdin {
        let readings = read_sensor_script(io::stdin().lock())?;
        println!("Scripted simulation ({} cycles):", readings.len());
        let inputs = SimulationInputs {
            sensor_sequences: Some(readings.as_slice()),
            ..Default::default()
        };
        simulation.run_to_console(readings.len(), inputs, true)
    } else {
        run_demos(&simulation)
    };

    match options.export {
        Some(ExportFormat::Json) => write_log_json(io::stdout().lock(), &logs)?,
        Some(ExportFormat::Csv) => write_log_csv(io::stdout().lock(), &logs)?,
        None => return Ok(()),
    }
    print_summary(&logs);
    Ok(())
}

/// The three reference runs. Returns the deterministic run's log.
fn run_demos(simulation: &Simulation) -> Vec<CycleRecord> {
    println!("Random simulation ({} cycles):", RANDOM_DEMO_CYCLES);
    simulation.run_to_console(RANDOM_DEMO_CYCLES, SimulationInputs::default(), true);

    println!("\nDeterministic simulation (4 cycles):");
    let readings = deterministic_readings();
    let logs = simulation.run_to_console(
        readings.len(),
        SimulationInputs {
            sensor_sequences: Some(readings.as_slice()),
            ..Default::default()
        },
        true,
    );

    println!("\nEmergency example (East has emergency on cycle 2):");
    let readings = emergency_readings();
    let directives = emergency_directives();
    simulation.run_to_console(
        readings.len(),
        SimulationInputs {
            sensor_sequences: Some(readings.as_slice()),
            emergency_sequence: Some(directives.as_slice()),
        },
        true,
    );

    logs
}

fn print_summary(logs: &[CycleRecord]) {
    let summary = summarize(logs);
    println!();
    println!(
        "Summary: {} cycles, {} emergency, average green {:.1}s",
        summary.cycles, summary.emergency_cycles, summary.average_green
    );
    for entry in &summary.per_direction {
        println!(
            "  {:<5} chosen {} time(s), {}s green",
            entry.direction.to_string(),
            entry.times_chosen,
            entry.green_seconds
        );
    }
}
