//! Single-intersection adaptive traffic signal controller.
//!
//! Each cycle reads per-direction vehicle counts, gives the green to one
//! approach (an emergency request wins, otherwise the busiest approach with
//! ties going North, East, South, West in that order), sizes the green by
//! that approach's share of traffic, and records the cycle.

pub mod control_system;
pub mod errors;
pub mod global_variables;
pub mod models;
pub mod monitoring;
pub mod sensors;
pub mod simulation_engine;

pub use control_system::ControllerConfig;
pub use errors::{ConfigError, InputError, SimulationError};
pub use models::{CycleRecord, Direction, Durations, SensorReading, SignalState, DIRECTIONS};
pub use simulation_engine::{simulate_traffic_controller, Simulation, SimulationInputs};
