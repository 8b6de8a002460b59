// simulation_engine/mod.rs
pub mod run_options;
pub mod scenarios;
pub mod simulation;

pub use run_options::{ExportFormat, RunOptions};
pub use simulation::{simulate_traffic_controller, OutputFailure, Simulation, SimulationInputs};
