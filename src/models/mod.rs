pub mod cycle_record;
pub mod direction;
pub mod sensor_reading;
pub mod signal_state;

pub use cycle_record::{CycleRecord, Durations};
pub use direction::{Direction, DIRECTIONS};
pub use sensor_reading::SensorReading;
pub use signal_state::{Light, LightColor, SignalState};
