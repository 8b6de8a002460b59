// simulation.rs
use crate::control_system::{ControllerConfig, TrafficLightController};
use crate::errors::SimulationError;
use crate::models::{CycleRecord, SensorReading};
use crate::monitoring::cycle_logger::{log_state, write_cycle_report};
use crate::sensors::sensor_reader::detect_traffic;
use rand::Rng;
use std::io::{self, Write};

/// Scripted per-cycle inputs, consumed by position.
///
/// Cycles past the end of `sensor_sequences` get random counts; cycles past the
/// end of `emergency_sequence` get no override.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulationInputs<'a> {
    pub sensor_sequences: Option<&'a [SensorReading]>,
    pub emergency_sequence: Option<&'a [Option<&'a str>]>,
}

impl<'a> SimulationInputs<'a> {
    fn sensors_for(&self, i: usize) -> Option<&'a SensorReading> {
        self.sensor_sequences.and_then(|seq| seq.get(i))
    }

    fn emergency_for(&self, i: usize) -> Option<&'a str> {
        self.emergency_sequence
            .and_then(|seq| seq.get(i))
            .copied()
            .flatten()
    }
}

/// What to do when a cycle report cannot be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFailure {
    /// Stop the run and return the error.
    Abort,
    /// Log the error, stop printing, and finish the remaining cycles.
    StopPrinting,
}

/// Runs a fixed number of independent decision cycles.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    controller: TrafficLightController,
}

impl Simulation {
    pub fn new(config: ControllerConfig) -> Result<Self, SimulationError> {
        Ok(Self {
            controller: TrafficLightController::new(config)?,
        })
    }

    /// Runs `iterations` cycles and returns one record per cycle, in order.
    ///
    /// When `enable_print` is set, each cycle's report is written to `out`, and
    /// a failed write aborts the run.
    pub fn run_with<R, W>(
        &self,
        iterations: usize,
        inputs: SimulationInputs<'_>,
        rng: &mut R,
        out: &mut W,
        enable_print: bool,
    ) -> Result<Vec<CycleRecord>, SimulationError>
    where
        R: Rng,
        W: Write,
    {
        let (logs, failure) =
            self.run_cycles(iterations, inputs, rng, out, enable_print, OutputFailure::Abort);
        match failure {
            Some(e) => Err(e.into()),
            None => Ok(logs),
        }
    }

    /// Runs with thread-local randomness and reports to stdout.
    ///
    /// If stdout stops accepting output the error is logged, printing stops, and
    /// the remaining cycles still run so the full log is returned.
    pub fn run_to_console(
        &self,
        iterations: usize,
        inputs: SimulationInputs<'_>,
        enable_print: bool,
    ) -> Vec<CycleRecord> {
        let mut rng = rand::rng();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let (logs, _) = self.run_cycles(
            iterations,
            inputs,
            &mut rng,
            &mut out,
            enable_print,
            OutputFailure::StopPrinting,
        );
        logs
    }

    /// The cycle loop behind every entry point. Returns the log and, for
    /// `OutputFailure::Abort`, the write error that ended the run early.
    fn run_cycles<R, W>(
        &self,
        iterations: usize,
        inputs: SimulationInputs<'_>,
        rng: &mut R,
        out: &mut W,
        enable_print: bool,
        on_failure: OutputFailure,
    ) -> (Vec<CycleRecord>, Option<io::Error>)
    where
        R: Rng,
        W: Write,
    {
        log::info!(
            "simulating {} cycles ({} scripted readings, {} scripted emergencies)",
            iterations,
            inputs.sensor_sequences.map_or(0, <[_]>::len),
            inputs.emergency_sequence.map_or(0, <[_]>::len)
        );

        let mut printing = enable_print;
        let mut logs = Vec::with_capacity(iterations);
        for i in 0..iterations {
            let counts = detect_traffic(inputs.sensors_for(i), rng);
            let decision = self.controller.decide(&counts, inputs.emergency_for(i));
            let record = log_state(
                &mut logs,
                i + 1,
                counts,
                decision.selection.direction,
                decision.durations,
                decision.selection.emergency,
            )
            .last();

            if let (true, Some(record)) = (printing, record) {
                if let Err(e) = write_cycle_report(out, record, &decision.state) {
                    match on_failure {
                        OutputFailure::Abort => return (logs, Some(e)),
                        OutputFailure::StopPrinting => {
                            log::error!(
                                "console output failed at cycle {}, printing disabled: {}",
                                i + 1,
                                e
                            );
                            printing = false;
                        }
                    }
                }
            }
        }

        log::info!("simulation finished after {} cycles", logs.len());
        (logs, None)
    }
}

/// Runs the controller with default timing, thread-local randomness and
/// console output.
pub fn simulate_traffic_controller(
    iterations: usize,
    sensor_sequences: Option<&[SensorReading]>,
    emergency_sequence: Option<&[Option<&str>]>,
    enable_print: bool,
) -> Vec<CycleRecord> {
    let inputs = SimulationInputs {
        sensor_sequences,
        emergency_sequence,
    };
    Simulation::default().run_to_console(iterations, inputs, enable_print)
}
